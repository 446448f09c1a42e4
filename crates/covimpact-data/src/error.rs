//! Error types for dataset operations.

use thiserror::Error;

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while building or loading the dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// Simulation configuration is invalid
    #[error("Invalid simulation config: {0}")]
    InvalidConfig(String),

    /// A sampling distribution could not be constructed
    #[error("Distribution error: {0}")]
    Distribution(String),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Expected column is missing from a dataset frame
    #[error("Missing column in dataset: {0}")]
    MissingColumn(String),

    /// Unknown sector name
    #[error("Unknown sector: {0}")]
    UnknownSector(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
