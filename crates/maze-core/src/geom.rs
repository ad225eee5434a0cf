//! Geometry primitive: [`Position`].
//!
//! Positions are `(row, col)` pairs. Row grows down, column grows right.

use std::fmt;
use std::ops::{Add, Sub};

/// A cell coordinate on a maze grid.
///
/// Components are signed so that stepping off the grid produces a position
/// that bounds checks can reject instead of wrapping around.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours in search order: north, south, west, east.
    ///
    /// The order matters: A* breaks f-ties by insertion order, so it fixes
    /// which of several shortest paths is returned.
    #[inline]
    pub const fn neighbors_4(self) -> [Position; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Whether `other` is at Manhattan distance exactly 1.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for (i32, i32) {
    fn from(p: Position) -> Self {
        (p.row, p.col)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_in_search_order() {
        let p = Position::new(2, 3);
        assert_eq!(
            p.neighbors_4(),
            [
                Position::new(1, 3),
                Position::new(3, 3),
                Position::new(2, 2),
                Position::new(2, 4),
            ]
        );
    }

    #[test]
    fn adjacency() {
        let p = Position::new(1, 1);
        assert!(p.is_adjacent(Position::new(0, 1)));
        assert!(p.is_adjacent(Position::new(1, 2)));
        assert!(!p.is_adjacent(Position::new(2, 2)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn row_major_ordering() {
        let mut v = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn display_as_pair() {
        assert_eq!(Position::new(4, 7).to_string(), "(4, 7)");
    }

    #[test]
    fn tuple_conversions() {
        let p: Position = (3, -1).into();
        assert_eq!(p, Position::new(3, -1));
        let t: (i32, i32) = p.into();
        assert_eq!(t, (3, -1));
    }

    #[test]
    fn add_sub() {
        let a = Position::new(1, 2);
        let b = Position::new(3, 5);
        assert_eq!(a + b, Position::new(4, 7));
        assert_eq!(b - a, Position::new(2, 3));
    }
}
