//! Level text format and the bundled sample course.
//!
//! A level is a rectangle of single-character rows: `0` void, `1` floor,
//! `B` the start cell (floor; the block begins standing on it) and `X` the
//! target cell (floor; the goal is standing on it). Parsing validates the
//! text up front so the solver itself can assume a well-formed board.

use std::fmt;

use thiserror::Error;

use crate::block::{Block, Direction};
use crate::grid::{CellKind, Grid};
use crate::solver;

/// Problems a level text can have.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unrecognized symbol '{symbol}' at column {x}, row {y}")]
    BadSymbol { symbol: char, x: usize, y: usize },
    #[error("level has no start marker 'B'")]
    MissingStart,
    #[error("level has no target marker 'X'")]
    MissingTarget,
    #[error("level has more than one '{0}' marker")]
    DuplicateMarker(char),
}

/// A parsed level: the board plus its start and goal configurations.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Level {
    pub grid: Grid,
    /// The block standing on the `B` cell.
    pub start: Block,
    /// The block standing on the `X` cell.
    pub goal: Block,
}

impl Level {
    /// Parses rows of `0`/`1`/`B`/`X` into a level.
    pub fn parse(rows: &[&str]) -> Result<Level, LevelError> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(LevelError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut goal = None;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LevelError::RaggedRow {
                    row: y,
                    found,
                    expected: width,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                let kind = match symbol {
                    '0' => CellKind::Void,
                    '1' => CellKind::Floor,
                    'B' => {
                        let here = Block::standing(x as i32, y as i32);
                        if start.replace(here).is_some() {
                            return Err(LevelError::DuplicateMarker('B'));
                        }
                        CellKind::Floor
                    }
                    'X' => {
                        let here = Block::standing(x as i32, y as i32);
                        if goal.replace(here).is_some() {
                            return Err(LevelError::DuplicateMarker('X'));
                        }
                        CellKind::Floor
                    }
                    _ => return Err(LevelError::BadSymbol { symbol, x, y }),
                };
                cells.push(kind);
            }
        }

        Ok(Level {
            grid: Grid::new(width, rows.len(), cells),
            start: start.ok_or(LevelError::MissingStart)?,
            goal: goal.ok_or(LevelError::MissingTarget)?,
        })
    }

    /// Runs the shortest-path search on this level.
    ///
    /// An empty result means the target cannot be reached.
    pub fn solve(&self) -> Vec<Direction> {
        solver::solve(&self.grid, self.start, self.goal)
    }
}

impl fmt::Display for Level {
    /// Renders the board in the input format, markers included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let symbol = if Block::standing(x, y) == self.start {
                    'B'
                } else if Block::standing(x, y) == self.goal {
                    'X'
                } else {
                    match self.grid.cell(x, y) {
                        CellKind::Floor => '1',
                        CellKind::Void => '0',
                    }
                };
                write!(f, "{symbol}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// The 14x9 course shipped with the original puzzle, used by the CLI and
/// as a larger regression scenario. Its shortest solution takes 28 rolls.
pub const SAMPLE: &[&str] = &[
    "00011111110000",
    "00011111110000",
    "11110000011100",
    "11100000001100",
    "11100000001100",
    "1B100111111111",
    "11100111111111",
    "000001X1001111",
    "00000111001111",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_level() {
        let level = Level::parse(SAMPLE).unwrap();
        assert_eq!(level.grid.width(), 14);
        assert_eq!(level.grid.height(), 9);
        assert_eq!(level.start, Block::standing(1, 5));
        assert_eq!(level.goal, Block::standing(6, 7));
        // markers sit on floor
        assert!(level.grid.is_floor(1, 5));
        assert!(level.grid.is_floor(6, 7));
    }

    #[test]
    fn test_display_round_trips_the_input() {
        let level = Level::parse(&["0B1", "1X0"]).unwrap();
        insta::assert_snapshot!(level.to_string(), @r"
        0B1
        1X0
        ");
    }

    #[test]
    fn test_rejects_empty_level() {
        assert_eq!(Level::parse(&[]), Err(LevelError::Empty));
        assert_eq!(Level::parse(&[""]), Err(LevelError::Empty));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        assert_eq!(
            Level::parse(&["B11", "1X"]),
            Err(LevelError::RaggedRow {
                row: 1,
                found: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn test_rejects_unknown_symbols() {
        assert_eq!(
            Level::parse(&["B1", "?X"]),
            Err(LevelError::BadSymbol {
                symbol: '?',
                x: 0,
                y: 1
            })
        );
    }

    #[test]
    fn test_rejects_missing_markers() {
        assert_eq!(Level::parse(&["111", "1X1"]), Err(LevelError::MissingStart));
        assert_eq!(Level::parse(&["111", "1B1"]), Err(LevelError::MissingTarget));
    }

    #[test]
    fn test_rejects_duplicate_markers() {
        assert_eq!(
            Level::parse(&["BB", "1X"]),
            Err(LevelError::DuplicateMarker('B'))
        );
        assert_eq!(
            Level::parse(&["BX", "1X"]),
            Err(LevelError::DuplicateMarker('X'))
        );
    }
}
