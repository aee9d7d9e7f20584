// Search configuration.
//
// The algorithm choice is a closed enum matched at the call site, never a
// name looked up at runtime, and every parameter is validated when the
// configuration is built so a bad value cannot surface deep inside the
// recursion.

use thiserror::Error;

/// Tree-search algorithms the move controller can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Plain fixed-depth minimax.
    #[default]
    Minimax,
    /// Minimax with alpha-beta pruning.
    AlphaBeta,
}

impl Algorithm {
    /// All available algorithms, for harness enumeration.
    pub fn all() -> &'static [Algorithm] {
        &[Algorithm::Minimax, Algorithm::AlphaBeta]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alphabeta",
        }
    }
}

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("fixed-depth search requires a depth of at least 1")]
    ZeroDepth,
    #[error("abort threshold must be positive, got {0} ms")]
    NonPositiveTimeout(f64),
}

/// Immutable search parameters, fixed for the lifetime of an agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Run iterative deepening instead of a single fixed-depth search.
    pub iterative: bool,
    /// Ply budget for fixed-depth mode; ignored when `iterative` is set.
    pub depth: u32,
    /// Remaining-budget threshold (milliseconds) below which the search
    /// aborts. Must leave enough slack for the unwind back to the caller.
    pub timeout_ms: f64,
}

/// Defaults of the reference agent: iterative alpha-beta with a 10 ms
/// safety margin.
const DEFAULT_DEPTH: u32 = 3;
const DEFAULT_TIMEOUT_MS: f64 = 10.0;

impl SearchConfig {
    pub fn new(
        algorithm: Algorithm,
        iterative: bool,
        depth: u32,
        timeout_ms: f64,
    ) -> Result<SearchConfig, ConfigError> {
        if !iterative && depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if !(timeout_ms > 0.0) {
            return Err(ConfigError::NonPositiveTimeout(timeout_ms));
        }
        Ok(SearchConfig {
            algorithm,
            iterative,
            depth,
            timeout_ms,
        })
    }

    /// Iterative-deepening configuration (depth is unbounded).
    pub fn iterative(algorithm: Algorithm, timeout_ms: f64) -> Result<SearchConfig, ConfigError> {
        SearchConfig::new(algorithm, true, DEFAULT_DEPTH, timeout_ms)
    }

    /// Single fixed-depth search without a deepening fallback.
    pub fn fixed_depth(
        algorithm: Algorithm,
        depth: u32,
        timeout_ms: f64,
    ) -> Result<SearchConfig, ConfigError> {
        SearchConfig::new(algorithm, false, depth, timeout_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            algorithm: Algorithm::AlphaBeta,
            iterative: true,
            depth: DEFAULT_DEPTH,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}
