//! Command-line options.
//!
//! # Examples
//!
//! Generate and solve the default 10x10 maze with 20% obstacles:
//!
//! ```text
//! $ pathfinder
//! ```
//!
//! Reproducible 15x30 maze, at most 100 generation attempts:
//!
//! ```text
//! $ pathfinder -r 15 -c 30 -p 0.35 --seed 42 --max-attempts 100
//! ```
//!
//! Solve a maze stored in the textual encoding:
//!
//! ```text
//! $ pathfinder --grid maze.txt
//! ```

use std::path::PathBuf;

use clap::Parser;
use maze_gen::MazeConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Generate a random maze and solve it with A*")]
pub struct Args {
    /// Number of rows
    #[arg(short, long, default_value_t = 10)]
    pub rows: i32,

    /// Number of columns
    #[arg(short, long, default_value_t = 10)]
    pub cols: i32,

    /// Probability in [0, 1] that a cell becomes an obstacle
    #[arg(short = 'p', long = "obstacle-prob", default_value_t = 0.2)]
    pub obstacle_prob: f64,

    /// Seed for reproducible mazes
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Give up after this many unsolvable mazes (default: retry forever)
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<usize>,

    /// Solve the maze in FILE instead of generating one
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with_all = ["rows", "cols", "obstacle_prob", "seed", "max_attempts"]
    )]
    pub grid: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Generation parameters selected on the command line.
    pub fn maze_config(&self) -> MazeConfig {
        MazeConfig {
            rows: self.rows,
            cols: self.cols,
            obstacle_probability: self.obstacle_prob,
            max_attempts: self.max_attempts,
        }
    }
}
