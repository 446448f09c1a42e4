//! Export functionality for covimpact datasets and statistics.
//!
//! This module provides CSV and JSON export capabilities for the simulated
//! business dataset, per-sector statistics, and the impact summary.

use crate::summary::ImpactSummary;
use covimpact_data::BusinessRecord;
use covimpact_stats::SectorStats;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// File name of the exported dataset CSV.
pub const DATASET_FILE: &str = "covid_impact_data.csv";

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn serialize_csv<T: Serialize>(records: impl IntoIterator<Item = T>) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in records {
        wtr.serialize(record)?;
    }
    Ok(String::from_utf8(
        wtr.into_inner().map_err(|e| e.into_error())?,
    )?)
}

impl Exporter for Vec<BusinessRecord> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => serialize_csv(self.iter()),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<SectorStats> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => serialize_csv(self.iter()),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Flattened summary metric for CSV export.
#[derive(Debug, Serialize, Deserialize)]
struct SummaryFlat {
    scope: String,
    metric: String,
    value: f64,
}

impl Exporter for ImpactSummary {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut records = vec![
                    SummaryFlat {
                        scope: "overall".to_string(),
                        metric: "n_businesses".to_string(),
                        value: self.n_businesses as f64,
                    },
                    SummaryFlat {
                        scope: "overall".to_string(),
                        metric: "mean_decline_pct".to_string(),
                        value: self.decline.mean,
                    },
                    SummaryFlat {
                        scope: "overall".to_string(),
                        metric: "median_decline_pct".to_string(),
                        value: self.decline.median,
                    },
                    SummaryFlat {
                        scope: "overall".to_string(),
                        metric: "total_pre_revenue".to_string(),
                        value: self.total_pre_revenue,
                    },
                    SummaryFlat {
                        scope: "overall".to_string(),
                        metric: "total_post_revenue".to_string(),
                        value: self.total_post_revenue,
                    },
                    SummaryFlat {
                        scope: "overall".to_string(),
                        metric: "aggregate_loss_pct".to_string(),
                        value: self.aggregate_loss_pct(),
                    },
                ];
                for sector in &self.sectors {
                    records.push(SummaryFlat {
                        scope: sector.sector.clone(),
                        metric: "mean_decline_pct".to_string(),
                        value: sector.mean_decline,
                    });
                    records.push(SummaryFlat {
                        scope: sector.sector.clone(),
                        metric: "median_decline_pct".to_string(),
                        value: sector.median_decline,
                    });
                    records.push(SummaryFlat {
                        scope: sector.sector.clone(),
                        metric: "count".to_string(),
                        value: sector.count as f64,
                    });
                }
                serialize_csv(records)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
