//! Pathfinder — generates a random maze, solves it with A* and prints the
//! result in the terminal.

pub mod app;
pub mod cli;

pub use app::run;
pub use cli::Args;
