//! Block configurations and the roll transition rules.
//!
//! A 1x1x2 block either stands upright on one cell or lies across two
//! adjacent cells. Rolling tips it 90 degrees over one of its edges, so a
//! standing block comes to rest on two cells and a lying block either
//! stands up (rolled along its long axis) or shifts sideways by a row or
//! column (rolled perpendicular to it).

use std::fmt;

use crate::grid::Grid;

/// A cardinal roll direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in the order successors are generated.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Single-letter form used in printed move sequences.
    pub fn as_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }

    /// The direction that undoes a roll in this direction.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Formats a move sequence as its letter string, e.g. `"URRD"`.
pub fn path_string(path: &[Direction]) -> String {
    path.iter().map(|d| d.as_char()).collect()
}

/// Whether the block stands on one cell or lies across two.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shape {
    /// Upright on a single cell.
    Standing,
    /// Across two horizontally adjacent cells.
    LyingX,
    /// Across two vertically adjacent cells.
    LyingY,
}

/// The pair of cells a block occupies; the unit of search state.
///
/// The pair is kept ordered so that `(x1, y1) <= (x2, y2)`: a standing
/// block has both pairs equal, a lying block has `x1 < x2` or `y1 < y2`.
/// Equality and hashing are purely positional, so two configurations
/// reached along different move sequences compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Block {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Block {
    /// An upright block on a single cell.
    pub fn standing(x: i32, y: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x,
            y2: y,
        }
    }

    /// Builds a configuration from its two occupied cells, normalizing
    /// their order.
    pub fn new(a: (i32, i32), b: (i32, i32)) -> Self {
        let ((x1, y1), (x2, y2)) = if a <= b { (a, b) } else { (b, a) };
        debug_assert!(
            (x1 == x2 && y1 == y2)
                || (y1 == y2 && x2 - x1 == 1)
                || (x1 == x2 && y2 - y1 == 1),
            "cells must coincide or be adjacent along one axis"
        );
        Self { x1, y1, x2, y2 }
    }

    /// Classifies the configuration by which cells coincide.
    pub fn shape(&self) -> Shape {
        if self.x1 == self.x2 && self.y1 == self.y2 {
            Shape::Standing
        } else if self.y1 == self.y2 {
            Shape::LyingX
        } else {
            Shape::LyingY
        }
    }

    /// The two occupied cells (equal when standing).
    pub fn cells(&self) -> [(i32, i32); 2] {
        [(self.x1, self.y1), (self.x2, self.y2)]
    }

    /// Attempts a single roll.
    ///
    /// Returns the configuration the block comes to rest in, or `None`
    /// when any cell it would occupy is void or off the board.
    pub fn roll(&self, dir: Direction, grid: &Grid) -> Option<Block> {
        use Direction::*;
        let Block { x1, y1, x2, y2 } = *self;
        let (a, b) = match (self.shape(), dir) {
            // standing: tips onto the two cells beyond the edge rolled over
            (Shape::Standing, Left) => ((x1 - 2, y1), (x1 - 1, y1)),
            (Shape::Standing, Right) => ((x1 + 1, y1), (x1 + 2, y1)),
            (Shape::Standing, Up) => ((x1, y1 - 2), (x1, y1 - 1)),
            (Shape::Standing, Down) => ((x1, y1 + 1), (x1, y1 + 2)),
            // lying, rolled along the long axis: stands up on the next cell
            (Shape::LyingX, Left) => ((x1 - 1, y1), (x1 - 1, y1)),
            (Shape::LyingX, Right) => ((x2 + 1, y1), (x2 + 1, y1)),
            (Shape::LyingY, Up) => ((x1, y1 - 1), (x1, y1 - 1)),
            (Shape::LyingY, Down) => ((x1, y2 + 1), (x1, y2 + 1)),
            // lying, rolled sideways: the whole span shifts one row/column
            (Shape::LyingX, Up) => ((x1, y1 - 1), (x2, y1 - 1)),
            (Shape::LyingX, Down) => ((x1, y1 + 1), (x2, y1 + 1)),
            (Shape::LyingY, Left) => ((x1 - 1, y1), (x1 - 1, y2)),
            (Shape::LyingY, Right) => ((x1 + 1, y1), (x1 + 1, y2)),
        };
        (grid.is_floor(a.0, a.1) && grid.is_floor(b.0, b.1)).then(|| Block::new(a, b))
    }

    /// Enumerates the legal rolls from this configuration, each tagged
    /// with the direction taken. Illegal rolls are omitted entirely.
    pub fn successors(&self, grid: &Grid) -> Vec<(Direction, Block)> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.roll(dir, grid).map(|next| (dir, next)))
            .collect()
    }
}
