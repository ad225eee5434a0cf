//! The [`Path`] returned by a successful search.

use std::fmt;

use maze_core::{Cell, Grid, Position};

/// Ordered positions from a start to an end, inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Position>);

impl Path {
    /// Wrap a sequence of positions.
    pub fn new(positions: Vec<Position>) -> Self {
        Self(positions)
    }

    /// The positions, start first.
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path holds no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges, i.e. the path cost under unit weights.
    #[inline]
    pub fn cost(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// First position.
    pub fn start(&self) -> Option<Position> {
        self.0.first().copied()
    }

    /// Last position.
    pub fn end(&self) -> Option<Position> {
        self.0.last().copied()
    }

    /// Whether the path passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Iterate over the positions, start first.
    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.0.iter()
    }

    /// Take the positions out.
    pub fn into_vec(self) -> Vec<Position> {
        self.0
    }

    /// Whether this is a valid start-to-end walk on `grid`: begins on the
    /// Start cell, ends on the End cell, every step is 4-adjacent and no
    /// position is an obstacle or outside the grid.
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        let (Some(first), Some(last)) = (self.start(), self.end()) else {
            return false;
        };
        if grid.at(first) != Some(Cell::Start) || grid.at(last) != Some(Cell::End) {
            return false;
        }
        if !self.0.iter().all(|&p| grid.is_traversable(p)) {
            return false;
        }
        self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Position>> for Path {
    fn from(v: Vec<Position>) -> Self {
        Self(v)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}
