//! Pathfinding on maze grids.
//!
//! This crate provides the start-to-end search used to solve and validate
//! mazes, and the graph-search primitives it is built from:
//!
//! - **A\*** shortest-path search ([`SearchSpace::astar_path`]) with the
//!   [`manhattan`] heuristic
//! - **BFS** unweighted distance maps ([`SearchSpace::bfs_map`],
//!   [`SearchSpace::bfs_distance`])
//! - **Maze solving** ([`find_path`], [`is_solvable`]) on a
//!   [`maze_core::Grid`], returning a [`Path`]
//!
//! Every query allocates its own working state, so calls are independent
//! of each other.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`AstarPather`] : [`Pather`] | A* |
//!
//! [`maze_core::Grid`] implements both.

mod astar;
mod bfs;
mod distance;
mod path;
mod search;
mod space;
mod traits;

pub use distance::manhattan;
pub use path::Path;
pub use search::{InvalidGridReason, PathError, SearchMode, endpoints, find_path, is_solvable};
pub use space::SearchSpace;
pub use traits::{AstarPather, Pather};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use maze_core::Position;

    #[test]
    fn path_round_trip() {
        let path = Path::new(vec![Position::new(0, 0), Position::new(0, 1)]);
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
