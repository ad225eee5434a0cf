use std::collections::BinaryHeap;

use maze_core::Position;

use crate::space::{NO_PARENT, Node, NodeRef, SearchSpace};
use crate::traits::AstarPather;

impl SearchSpace {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists within the space. Frontier entries that share an `f` score pop
    /// in insertion order, so the result is deterministic for a given pather.
    pub fn astar_path<P: AstarPather>(
        &self,
        pather: &P,
        from: Position,
        to: Position,
    ) -> Option<Vec<Position>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        let mut nodes = vec![Node::default(); self.len()];
        {
            let node = &mut nodes[start_idx];
            node.g = 0;
            node.seen = true;
        }

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: pather.estimate(from, to),
            seq,
        });

        let mut nbuf: Vec<Position> = Vec::with_capacity(4);
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            if ci == goal_idx {
                break 'search true;
            }

            // Skip stale entries left behind by later relaxations.
            if nodes[ci].closed {
                continue;
            }

            nodes[ci].closed = true;
            expanded += 1;
            let current_g = nodes[ci].g;
            let current_pos = self.position(ci);

            nbuf.clear();
            pather.neighbors(current_pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut nodes[ni];
                if n.seen && tentative_g >= n.g {
                    continue;
                }

                n.g = tentative_g;
                n.parent = ci;
                n.seen = true;

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + pather.estimate(np, to),
                    seq,
                });
            }
        };

        log::trace!(
            "astar {from} -> {to}: expanded {expanded} nodes, found = {found}"
        );

        if !found {
            return None;
        }

        // Reconstruct path.
        let mut path = Vec::with_capacity(nodes[goal_idx].g as usize + 1);
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.position(ci));
            ci = nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}
