//! Error types.
//!
//! All fallible entry points (config validation, matrix construction, engine
//! startup) report problems through [`Error`] before any optimization work
//! begins; a rejected configuration never produces a partially-run engine.
//!
//! Contract violations inside operators — such as a crossover emitting an
//! invalid permutation — are programming errors, not runtime conditions, and
//! are covered by tests rather than error variants.

use thiserror::Error;

/// Errors reported by the optimization engines.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid configuration value or an operator/encoding mismatch.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A malformed distance or processing-time matrix.
    #[error("invalid matrix: {0}")]
    Matrix(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
