//! Solver configuration.

use crate::error::ConfigError;

/// How repeated layouts are handled during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupPolicy {
    /// Remember the lowest `g` inserted for each layout and drop insertions
    /// that cannot improve on it.
    #[default]
    BestCost,
    /// Insert every generated layout, duplicates included.
    Disabled,
}

/// Search behaviour and resource bounds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolverConfig {
    pub dedup: DedupPolicy,
    /// Cap on expanded nodes. `None` means unbounded.
    pub max_expansions: Option<u64>,
    /// Cap on nodes created, the root included. `None` means unbounded.
    pub max_nodes: Option<usize>,
}

impl SolverConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLimit`] if a limit is set to zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_expansions == Some(0) {
            return Err(ConfigError::ZeroLimit {
                name: "max_expansions",
            });
        }
        if self.max_nodes == Some(0) {
            return Err(ConfigError::ZeroLimit { name: "max_nodes" });
        }
        Ok(())
    }
}
