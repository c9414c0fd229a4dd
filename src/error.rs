//! Typed errors for layout construction, configuration and search.

use thiserror::Error;

/// Rejected puzzle input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("puzzle dimension must be at least 1, got {0}")]
    InvalidDimension(usize),

    #[error("puzzle dimension {0} is too large to index")]
    DimensionTooLarge(usize),

    #[error("expected {expected} tiles for a {dimension}x{dimension} puzzle, got {actual}")]
    WrongTileCount {
        dimension: usize,
        expected: usize,
        actual: usize,
    },

    #[error("tile {tile} at position {position} is outside 0..={max}")]
    TileOutOfRange { tile: u32, position: usize, max: u32 },

    #[error("tile {tile} appears more than once (again at position {position})")]
    DuplicateTile { tile: u32, position: usize },

    #[error("layout is {actual}x{actual} but the solver expects {expected}x{expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Rejected solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be greater than zero when set")]
    ZeroLimit { name: &'static str },
}

/// Failure of a search run.
///
/// Frontier exhaustion is not an error: [`crate::AStarSolver::solve`] reports
/// it as `Ok(None)`. These variants cover rejected configuration and resource
/// bounds that stopped the search before it could finish.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid solver configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("expansion limit of {limit} reached before a solution was found")]
    ExpansionLimit { limit: u64 },

    #[error("node limit of {limit} reached before a solution was found")]
    NodeLimit { limit: usize },
}
