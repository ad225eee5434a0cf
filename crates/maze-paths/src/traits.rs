use maze_core::{Grid, Position};

use crate::distance::manhattan;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    ///
    /// Every edge has unit cost. The order of appended neighbors decides
    /// which of several equally short paths a search returns.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}

/// Pather with an admissible heuristic, as required by A*.
pub trait AstarPather: Pather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Position, to: Position) -> i32;
}

impl Pather for Grid {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        self.neighbors_into(p, buf);
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Position, to: Position) -> i32 {
        manhattan(from, to)
    }
}
