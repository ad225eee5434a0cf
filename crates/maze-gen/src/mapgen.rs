//! Random maze generation by rejection sampling.
//!
//! Each attempt scatters obstacles over a fresh grid with one Start and one
//! End cell, then asks the pathfinder whether End is reachable. Unsolvable
//! grids are thrown away whole and the next attempt starts from scratch.

use std::fmt;

use maze_core::{Cell, Grid, Position};
use maze_paths::is_solvable;
use rand::Rng;

use crate::config::{ConfigError, MazeConfig};

/// Errors returned by [`MazeGen::generate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenError {
    /// The parameters cannot produce a maze.
    InvalidConfig(ConfigError),
    /// Every allowed attempt produced an unsolvable grid.
    AttemptsExhausted(usize),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(e) => write!(f, "invalid maze parameters: {e}"),
            Self::AttemptsExhausted(n) => {
                write!(f, "no solvable maze found after {n} attempts")
            }
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            Self::AttemptsExhausted(_) => None,
        }
    }
}

impl From<ConfigError> for GenError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}

/// Maze generator driven by an injected random source.
///
/// Seed `rng` (e.g. `StdRng::seed_from_u64`) for reproducible mazes.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: MazeConfig,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator.
    pub fn new(config: MazeConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Generate a solvable maze.
    ///
    /// Retries until a candidate passes validation, or until
    /// [`MazeConfig::max_attempts`] candidates have been rejected.
    pub fn generate(&mut self) -> Result<Grid, GenError> {
        self.config.validate()?;

        let mut attempt = 0usize;
        loop {
            if let Some(max) = self.config.max_attempts {
                if attempt >= max {
                    log::warn!("giving up after {attempt} unsolvable mazes");
                    return Err(GenError::AttemptsExhausted(attempt));
                }
            }
            attempt += 1;

            let grid = self.sample();
            if is_solvable(&grid) {
                log::info!(
                    "generated solvable {}x{} maze after {attempt} attempt(s)",
                    grid.rows(),
                    grid.cols()
                );
                return Ok(grid);
            }
            log::debug!("attempt {attempt}: maze unsolvable, regenerating");
        }
    }

    /// Build a single candidate grid without checking solvability.
    pub fn generate_once(&mut self) -> Result<Grid, GenError> {
        self.config.validate()?;
        Ok(self.sample())
    }

    /// One candidate. Assumes a validated config.
    fn sample(&mut self) -> Grid {
        let start = self.random_position();
        let end = loop {
            let p = self.random_position();
            if p != start {
                break p;
            }
        };

        let p = self.config.obstacle_probability;
        let rng = &mut self.rng;
        Grid::from_fn(self.config.rows, self.config.cols, |pos| {
            if pos == start {
                Cell::Start
            } else if pos == end {
                Cell::End
            } else if rng.random::<f64>() < p {
                Cell::Obstacle
            } else {
                Cell::Free
            }
        })
    }

    fn random_position(&mut self) -> Position {
        Position::new(
            self.rng.random_range(0..self.config.rows),
            self.rng.random_range(0..self.config.cols),
        )
    }
}
