//! Error types for chart rendering.

use thiserror::Error;

/// Result type for chart rendering.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while rendering charts.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Dataset has no rows to plot
    #[error("Cannot render {0} from an empty dataset")]
    EmptyDataset(&'static str),

    /// Drawing backend error
    #[error("Drawing error: {0}")]
    Draw(String),

    /// Statistics error
    #[error("Statistics error: {0}")]
    Stats(#[from] covimpact_stats::StatsError),

    /// Dataset error
    #[error("Dataset error: {0}")]
    Data(#[from] covimpact_data::DataError),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
