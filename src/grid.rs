//! Grid representation for the rolling-block puzzle.
//!
//! The board is an immutable rectangle of floor and void cells. Probing any
//! coordinate outside the rectangle answers `Void`, so the move rules in
//! `block` never need a separate bounds-error path.

use std::fmt;

/// What a single board cell is made of.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellKind {
    /// Solid tile the block may rest on.
    Floor,
    /// A hole; any block cell ending up here makes the move illegal.
    Void,
}

/// An immutable rectangular board of floor and void cells.
///
/// Coordinates are 0-indexed with `x` as the column and `y` as the row,
/// growing rightward and downward. The grid never changes after
/// construction, so one grid can back any number of searches.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Builds a grid from row-major cells.
    ///
    /// `cells.len()` must equal `width * height`.
    pub fn new(width: usize, height: usize, cells: Vec<CellKind>) -> Self {
        assert!(
            cells.len() == width * height,
            "cell count must match dimensions"
        );
        Self {
            width: width as i32,
            height: height as i32,
            cells,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the cell kind at `(x, y)`.
    ///
    /// Any coordinate off the board reads as `Void`; this never panics.
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> CellKind {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            CellKind::Void
        } else {
            self.cells[(y * self.width + x) as usize]
        }
    }

    /// True if `(x, y)` is on the board and is floor.
    #[inline]
    pub fn is_floor(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == CellKind::Floor
    }
}

impl fmt::Display for Grid {
    /// Renders the board as rows of `1` (floor) and `0` (void).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_str(match self.cell(x, y) {
                    CellKind::Floor => "1",
                    CellKind::Void => "0",
                })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> Grid {
        Grid::new(
            2,
            2,
            vec![
                CellKind::Floor,
                CellKind::Void,
                CellKind::Void,
                CellKind::Floor,
            ],
        )
    }

    #[test]
    fn test_cell_lookup_is_row_major() {
        let grid = checkerboard();
        assert_eq!(grid.cell(0, 0), CellKind::Floor);
        assert_eq!(grid.cell(1, 0), CellKind::Void);
        assert_eq!(grid.cell(0, 1), CellKind::Void);
        assert_eq!(grid.cell(1, 1), CellKind::Floor);
    }

    #[test]
    fn test_out_of_bounds_reads_as_void() {
        let grid = checkerboard();
        assert_eq!(grid.cell(-1, 0), CellKind::Void);
        assert_eq!(grid.cell(0, -1), CellKind::Void);
        assert_eq!(grid.cell(2, 0), CellKind::Void);
        assert_eq!(grid.cell(0, 2), CellKind::Void);
        assert!(!grid.is_floor(i32::MIN, i32::MAX));
    }

    #[test]
    fn test_display_matches_layout() {
        let grid = checkerboard();
        insta::assert_snapshot!(grid.to_string(), @r"
        10
        01
        ");
    }
}
