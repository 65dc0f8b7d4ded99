//! Error types for the batch data model.

use thiserror::Error;

/// Errors that can occur while building or inspecting batches.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid dimensions provided.
    #[error("Invalid dimensions: {0}")]
    InvalidDimension(String),

    /// Two grids that must share a shape do not.
    #[error("Shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

/// Result type for batch operations.
pub type Result<T> = std::result::Result<T, CoreError>;
