//! Error types reported by the grid engine

use thiserror::Error;

/// Failures returned by [`Universe`](crate::game_of_life::Universe) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Construction with a zero dimension, or one whose cell count overflows `usize`.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: usize, height: usize },

    /// Direct addressing outside the grid. Coordinates are never clamped or wrapped.
    #[error("cell ({row}, {col}) is out of bounds for a {width}x{height} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
