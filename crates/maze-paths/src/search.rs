//! Start-to-end search on a maze [`Grid`].
//!
//! [`find_path`] locates the unique Start and End cells and runs A* between
//! them. [`SearchMode`] decides whether a failure is reported through the
//! log (a user asked for a solution) or stays silent (the generator is only
//! checking solvability).

use std::fmt;

use maze_core::{Cell, Grid, Position};

use crate::path::Path;
use crate::space::SearchSpace;

/// How a failed search is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Failures are logged as warnings.
    #[default]
    Full,
    /// Failures are a silent signal, used to validate generated mazes.
    Validate,
}

/// Why a grid cannot be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGridReason {
    MissingStart,
    MissingEnd,
    DuplicateStart,
    DuplicateEnd,
}

impl fmt::Display for InvalidGridReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "missing start ('S')"),
            Self::MissingEnd => write!(f, "missing end ('E')"),
            Self::DuplicateStart => write!(f, "more than one start ('S')"),
            Self::DuplicateEnd => write!(f, "more than one end ('E')"),
        }
    }
}

/// Errors returned by [`find_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// Start or End cannot be located.
    InvalidGrid(InvalidGridReason),
    /// End is not reachable from Start.
    NotFound,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid(reason) => write!(f, "invalid maze: {reason}"),
            Self::NotFound => write!(f, "no solution: no path exists from start to end"),
        }
    }
}

impl std::error::Error for PathError {}

/// Locate the single `cell` in `grid`.
fn locate_unique(
    grid: &Grid,
    cell: Cell,
    missing: InvalidGridReason,
    duplicate: InvalidGridReason,
) -> Result<Position, PathError> {
    let pos = grid.locate(cell).ok_or(PathError::InvalidGrid(missing))?;
    if grid.count(cell) > 1 {
        return Err(PathError::InvalidGrid(duplicate));
    }
    Ok(pos)
}

/// Start and End positions of `grid`.
pub fn endpoints(grid: &Grid) -> Result<(Position, Position), PathError> {
    let start = locate_unique(
        grid,
        Cell::Start,
        InvalidGridReason::MissingStart,
        InvalidGridReason::DuplicateStart,
    )?;
    let end = locate_unique(
        grid,
        Cell::End,
        InvalidGridReason::MissingEnd,
        InvalidGridReason::DuplicateEnd,
    )?;
    Ok((start, end))
}

/// Find a shortest path from the Start cell to the End cell of `grid`.
///
/// Movement is 4-directional with unit cost; obstacles block. The search
/// never retries and never returns a partial path.
pub fn find_path(grid: &Grid, mode: SearchMode) -> Result<Path, PathError> {
    let result = endpoints(grid).and_then(|(start, end)| {
        SearchSpace::of(grid)
            .astar_path(grid, start, end)
            .map(Path::new)
            .ok_or(PathError::NotFound)
    });

    match (&result, mode) {
        (Ok(path), _) => log::debug!("path found with cost {}", path.cost()),
        (Err(e), SearchMode::Full) => log::warn!("{e}"),
        (Err(e), SearchMode::Validate) => log::trace!("validation failed: {e}"),
    }
    result
}

/// Whether `grid` has a unique Start and End connected by a path.
pub fn is_solvable(grid: &Grid) -> bool {
    find_path(grid, SearchMode::Validate).is_ok()
}
