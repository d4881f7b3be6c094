//! Rolling-Block Puzzle Solver
//!
//! Rolls a 1x1x2 block across a grid of floor and void tiles, tipping it
//! over an edge on every move, until it stands upright on the target cell.
//! The binary solves the bundled course and prints the move sequence.

use clap::{Parser, Subcommand};

use roller::block::path_string;
use roller::level::{Level, SAMPLE};

/// Solves a rolling-block puzzle and prints the shortest move sequence.
#[derive(Parser)]
#[command(name = "roller")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the bundled course and print the move sequence.
    Solve,
    /// Print the bundled course map.
    Show,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Show) => print!("{}", sample_level()),
        Some(Command::Solve) | None => run_solve(),
    }
}

/// Solves the bundled course and prints the result.
fn run_solve() {
    let level = sample_level();
    let path = level.solve();

    if path.is_empty() && level.start != level.goal {
        println!("no solution");
    } else {
        println!("{} ({} moves)", path_string(&path), path.len());
    }
}

/// Loads the course compiled into the binary.
fn sample_level() -> Level {
    match Level::parse(SAMPLE) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("bundled course is invalid: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_course_takes_28_rolls() {
        let path = sample_level().solve();
        assert_eq!(path.len(), 28);
    }

    #[test]
    fn test_sample_course_path_reaches_the_target() {
        let level = sample_level();
        let mut block = level.start;
        for dir in level.solve() {
            block = block
                .roll(dir, &level.grid)
                .expect("every move in the path is legal");
        }
        assert_eq!(block, level.goal);
    }
}
