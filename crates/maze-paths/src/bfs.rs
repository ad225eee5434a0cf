use std::collections::VecDeque;

use maze_core::Position;

use crate::space::SearchSpace;
use crate::traits::Pather;

impl SearchSpace {
    /// Compute a single-source breadth-first search distance map.
    ///
    /// Each step has cost 1. The returned vector is indexed row-major and
    /// holds `None` for positions that cannot be reached from `source`
    /// (or for every position, if `source` lies outside the space).
    pub fn bfs_map<P: Pather>(&self, pather: &P, source: Position) -> Vec<Option<usize>> {
        let mut dist: Vec<Option<usize>> = vec![None; self.len()];
        let Some(si) = self.idx(source) else {
            return dist;
        };

        let mut queue: VecDeque<usize> = VecDeque::new();
        dist[si] = Some(0);
        queue.push_back(si);

        let mut nbuf: Vec<Position> = Vec::with_capacity(4);

        while let Some(ci) = queue.pop_front() {
            let Some(current_dist) = dist[ci] else {
                continue;
            };
            let cp = self.position(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if dist[ni].is_some() {
                    continue;
                }
                dist[ni] = Some(current_dist + 1);
                queue.push_back(ni);
            }
        }

        dist
    }

    /// Unweighted shortest distance (in edges) from `from` to `to`.
    ///
    /// Returns `None` if `to` is unreachable or either endpoint is outside
    /// the space.
    pub fn bfs_distance<P: Pather>(&self, pather: &P, from: Position, to: Position) -> Option<usize> {
        let ti = self.idx(to)?;
        self.bfs_map(pather, from)[ti]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Cell, Grid};

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn open_grid_distances_are_manhattan() {
        let grid = Grid::new(4, 5);
        let space = SearchSpace::of(&grid);
        let map = space.bfs_map(&grid, p(1, 2));
        for (pos, _) in grid.iter() {
            let i = grid.index_of(pos).unwrap();
            assert_eq!(map[i], Some(crate::manhattan(pos, p(1, 2)) as usize));
        }
    }

    #[test]
    fn obstacles_are_unreached() {
        let mut grid = Grid::new(3, 3);
        grid.set(p(1, 1), Cell::Obstacle).unwrap();
        let space = SearchSpace::of(&grid);
        let map = space.bfs_map(&grid, p(0, 0));
        assert_eq!(map[grid.index_of(p(1, 1)).unwrap()], None);
        assert_eq!(space.bfs_distance(&grid, p(0, 0), p(2, 2)), Some(4));
    }

    #[test]
    fn unreachable_and_outside() {
        let mut grid = Grid::new(3, 3);
        for r in 0..3 {
            grid.set(p(r, 1), Cell::Obstacle).unwrap();
        }
        let space = SearchSpace::of(&grid);
        assert_eq!(space.bfs_distance(&grid, p(0, 0), p(0, 2)), None);
        assert_eq!(space.bfs_distance(&grid, p(0, 0), p(5, 5)), None);
        assert!(space.bfs_map(&grid, p(-1, 0)).iter().all(Option::is_none));
    }
}
