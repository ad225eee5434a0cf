//! Random maze generation for the maze workspace.
//!
//! [`MazeGen`] samples grids with one Start, one End and randomly placed
//! obstacles, and keeps sampling until the pathfinder confirms that End is
//! reachable from Start.

pub mod config;
pub mod mapgen;

pub use config::{ConfigError, MAX_CELLS, MazeConfig};
pub use mapgen::{GenError, MazeGen};
