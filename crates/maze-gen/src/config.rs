//! Generation parameters.

use std::fmt;

use maze_core::Grid;

/// Largest number of cells a generated maze may hold.
pub const MAX_CELLS: usize = i32::MAX as usize;

/// Parameters for [`MazeGen`](crate::MazeGen).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    /// Number of rows (>= 1).
    pub rows: i32,
    /// Number of columns (>= 1).
    pub cols: i32,
    /// Chance in `[0, 1]` that a non-endpoint cell becomes an obstacle.
    pub obstacle_probability: f64,
    /// Upper bound on generation attempts. `None` retries until a solvable
    /// maze comes up, which may take very long for probabilities near 1.
    pub max_attempts: Option<usize>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            obstacle_probability: 0.2,
            max_attempts: None,
        }
    }
}

impl MazeConfig {
    /// Default parameters with the given extents.
    pub fn with_size(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the obstacle probability (builder).
    pub fn obstacle_probability(mut self, p: f64) -> Self {
        self.obstacle_probability = p;
        self
    }

    /// Bound the number of attempts (builder).
    pub fn max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = Some(n);
        self
    }

    /// Check that a solvable maze can be sampled from these parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 1 || self.cols < 1 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        // Start and End need two distinct cells.
        if self.rows == 1 && self.cols == 1 {
            return Err(ConfigError::SingleCell);
        }
        if !Grid::cell_count(self.rows, self.cols).is_some_and(|n| n <= MAX_CELLS) {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let p = self.obstacle_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Probability(p));
        }
        if self.max_attempts == Some(0) {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}

/// Parameters that cannot produce a maze.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Rows or columns below 1.
    EmptyGrid { rows: i32, cols: i32 },
    /// A 1x1 grid has no room for both Start and End.
    SingleCell,
    /// More than [`MAX_CELLS`] cells.
    TooLarge { rows: i32, cols: i32 },
    /// Obstacle probability outside `[0, 1]` or not a number.
    Probability(f64),
    /// `max_attempts` of zero.
    ZeroAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "grid must be at least 1x1, got {rows}x{cols}")
            }
            Self::SingleCell => write!(f, "a 1x1 grid cannot hold both start and end"),
            Self::TooLarge { rows, cols } => {
                write!(f, "a {rows}x{cols} grid exceeds {MAX_CELLS} cells")
            }
            Self::Probability(p) => {
                write!(f, "obstacle probability must be within [0, 1], got {p}")
            }
            Self::ZeroAttempts => write!(f, "max attempts must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = MazeConfig::default();
        assert_eq!(c.rows, 10);
        assert_eq!(c.cols, 10);
        assert_eq!(c.obstacle_probability, 0.2);
        assert_eq!(c.max_attempts, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builders() {
        let c = MazeConfig::with_size(4, 6)
            .obstacle_probability(0.5)
            .max_attempts(3);
        assert_eq!((c.rows, c.cols), (4, 6));
        assert_eq!(c.obstacle_probability, 0.5);
        assert_eq!(c.max_attempts, Some(3));
    }

    #[test]
    fn rejects_bad_extents() {
        assert_eq!(
            MazeConfig::with_size(0, 5).validate(),
            Err(ConfigError::EmptyGrid { rows: 0, cols: 5 })
        );
        assert_eq!(
            MazeConfig::with_size(1, 1).validate(),
            Err(ConfigError::SingleCell)
        );
        assert!(MazeConfig::with_size(1, 2).validate().is_ok());
    }

    #[test]
    fn rejects_oversized_extents() {
        assert_eq!(
            MazeConfig::with_size(50_000, 50_000)
                .obstacle_probability(0.0)
                .validate(),
            Err(ConfigError::TooLarge {
                rows: 50_000,
                cols: 50_000
            })
        );
        assert!(matches!(
            MazeConfig::with_size(i32::MAX, 2).validate(),
            Err(ConfigError::TooLarge { .. })
        ));
        // Exactly at the limit is fine.
        assert!(MazeConfig::with_size(1, i32::MAX).validate().is_ok());
        assert_eq!(
            ConfigError::TooLarge { rows: 3, cols: 4 }.to_string(),
            format!("a 3x4 grid exceeds {MAX_CELLS} cells")
        );
    }

    #[test]
    fn rejects_bad_probability() {
        for p in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let c = MazeConfig::default().obstacle_probability(p);
            assert!(matches!(c.validate(), Err(ConfigError::Probability(_))));
        }
        assert!(MazeConfig::default().obstacle_probability(0.0).validate().is_ok());
        assert!(MazeConfig::default().obstacle_probability(1.0).validate().is_ok());
    }

    #[test]
    fn rejects_zero_attempts() {
        assert_eq!(
            MazeConfig::default().max_attempts(0).validate(),
            Err(ConfigError::ZeroAttempts)
        );
    }
}
