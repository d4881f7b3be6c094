//! Rolling-Block Puzzle Solver Library
//!
//! Finds a shortest sequence of rolls taking a 1x1x2 block from its start
//! cell to standing upright on the target cell of a floor/void board.
//! `level` parses the text format, `block` implements the roll rules and
//! `solver` runs an A* search over block configurations.

pub mod block;
pub mod grid;
pub mod level;
pub mod solver;

pub use block::{path_string, Block, Direction, Shape};
pub use grid::{CellKind, Grid};
pub use level::{Level, LevelError};
pub use solver::solve;
