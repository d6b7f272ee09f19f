//! Error taxonomy for grid construction, access, and generation advance.

use thiserror::Error;

/// Grid construction and access failures.
///
/// Out-of-range accesses fail the call; coordinates are never clamped or
/// wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be at least 1x1, got {height}x{width}")]
    InvalidDimension { height: usize, width: usize },

    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}

/// Failures raised while building the engine or advancing a generation.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start the row worker runtime")]
    Runtime(#[from] std::io::Error),

    #[error("row worker failed")]
    RowTask(#[from] tokio::task::JoinError),
}
