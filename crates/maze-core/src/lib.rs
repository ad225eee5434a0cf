//! **maze-core** — grid model for maze generation and pathfinding.
//!
//! This crate provides the foundational types used across the maze
//! workspace: the [`Position`] coordinate, the semantic [`Cell`] state, the
//! rectangular [`Grid`] and its textual encoding.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod text;

pub use cell::Cell;
pub use geom::Position;
pub use grid::{Grid, OutOfBounds};
pub use text::ParseGridError;
