//! Error types for solver strategies.

use thiserror::Error;

/// Errors that can occur during a batched solve.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Error from the batch data model.
    #[error("Batch error: {0}")]
    Core(#[from] trisolve_core::CoreError),
}

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;
