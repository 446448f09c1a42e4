//! Error types for statistics operations.

use thiserror::Error;

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors that can occur while computing statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Input slice was empty
    #[error("Cannot compute {0} of an empty input")]
    EmptyInput(&'static str),

    /// Histogram bin count was zero
    #[error("Histogram bin count must be at least 1")]
    InvalidBinCount,

    /// Input contained a non-finite value
    #[error("Non-finite value in input at index {0}")]
    NonFinite(usize),

    /// Expected column is missing from the frame
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
