//! Textual grid encoding.
//!
//! One token per cell (`0` free, `1` obstacle, `S` start, `E` end), cells
//! separated by a single space, rows separated by `'\n'`:
//!
//! ```text
//! S 0 1
//! 0 0 1
//! 1 0 E
//! ```
//!
//! Parsing is lenient about whitespace: the text is trimmed, blank lines
//! are rejected, and any run of spaces or tabs separates tokens.

use crate::cell::Cell;
use crate::geom::Position;
use crate::grid::Grid;
use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing a textual grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// The text holds no rows.
    Empty,
    /// A row has a different number of cells than the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A token is not one of `0`, `1`, `S`, `E`.
    InvalidToken { token: String, pos: Position },
}

impl fmt::Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no rows"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidToken { token, pos } => {
                write!(f, "grid: invalid token \u{201c}{token}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for ParseGridError {}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseGridError::Empty);
        }

        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut rows = 0usize;

        for (r, line) in s.lines().enumerate() {
            let mut found = 0usize;
            for (c, token) in line.split_whitespace().enumerate() {
                let mut chars = token.chars();
                let cell = match (chars.next(), chars.next()) {
                    (Some(ch), None) => Cell::from_token(ch),
                    _ => None,
                };
                let Some(cell) = cell else {
                    return Err(ParseGridError::InvalidToken {
                        token: token.to_string(),
                        pos: Position::new(r as i32, c as i32),
                    });
                };
                cells.push(cell);
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(ParseGridError::RaggedRow {
                        row: r,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = width.unwrap_or(0);
        Grid::from_cells(rows as i32, cols as i32, cells).ok_or(ParseGridError::Empty)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
