//! Error types for the automaton core

use thiserror::Error;

/// Errors produced by the simulation core.
///
/// Everything here is fatal to the call that raised it; the domain has no
/// transient failures to retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A pattern name at the user boundary did not match any known seed
    /// pattern.
    #[error("invalid seed pattern: '{0}'")]
    InvalidPattern(String),

    /// Grid dimensions must both be positive.
    #[error("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}
