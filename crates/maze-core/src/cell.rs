//! The [`Cell`] type — the semantic state of one maze square.

use std::fmt;

/// State of a maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    Obstacle,
    Start,
    End,
}

impl Cell {
    /// All cell kinds, in token order.
    pub const ALL: [Cell; 4] = [Cell::Free, Cell::Obstacle, Cell::Start, Cell::End];

    /// Single-character token used by the textual grid encoding.
    #[inline]
    pub const fn token(self) -> char {
        match self {
            Cell::Free => '0',
            Cell::Obstacle => '1',
            Cell::Start => 'S',
            Cell::End => 'E',
        }
    }

    /// Inverse of [`token`](Self::token).
    #[inline]
    pub const fn from_token(ch: char) -> Option<Cell> {
        match ch {
            '0' => Some(Cell::Free),
            '1' => Some(Cell::Obstacle),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::End),
            _ => None,
        }
    }

    /// Whether a path may pass through this cell.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Cell::Obstacle)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
