//! Report generation for covimpact analysis runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A report from an analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report title.
    pub title: String,

    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,

    /// Snapshot of the simulation configuration used for the run.
    pub config: serde_json::Value,

    /// Report contents (JSON format).
    pub contents: serde_json::Value,
}

impl Report {
    /// Create a new report.
    pub fn new(title: String, config: serde_json::Value, contents: serde_json::Value) -> Self {
        Self {
            title,
            timestamp: Utc::now(),
            config,
            contents,
        }
    }

    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as pretty JSON to a file.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ReportError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    title: Option<String>,
    config: Option<serde_json::Value>,
    contents: Option<serde_json::Value>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the configuration snapshot.
    pub fn config(mut self, config: serde_json::Value) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the report contents.
    pub fn contents(mut self, contents: serde_json::Value) -> Self {
        self.contents = Some(contents);
        self
    }

    /// Build the report.
    pub fn build(self) -> Result<Report, ReportError> {
        Ok(Report::new(
            self.title
                .unwrap_or_else(|| "COVID-19 Economic Impact Analysis".to_string()),
            self.config.unwrap_or(serde_json::Value::Null),
            self.contents.unwrap_or(serde_json::Value::Null),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_creation() {
        let report = Report::new(
            "Impact Run".to_string(),
            serde_json::json!({"seed": 42}),
            serde_json::json!({"test": "data"}),
        );

        assert_eq!(report.title, "Impact Run");
        assert_eq!(report.config["seed"], 42);
    }

    #[test]
    fn test_report_builder() {
        let report = ReportBuilder::new()
            .title("Quarterly".to_string())
            .config(serde_json::json!({"n_businesses": 500}))
            .contents(serde_json::json!({"key": "value"}))
            .build()
            .unwrap();

        assert_eq!(report.title, "Quarterly");
        assert_eq!(report.config["n_businesses"], 500);
    }

    #[test]
    fn test_builder_defaults() {
        let report = ReportBuilder::new().build().unwrap();
        assert_eq!(report.title, "COVID-19 Economic Impact Analysis");
        assert_eq!(report.contents, serde_json::Value::Null);
    }

    #[test]
    fn test_write_to_file() {
        let report = Report::new(
            "File Test".to_string(),
            serde_json::Value::Null,
            serde_json::json!({"ok": true}),
        );
        let path = std::env::temp_dir().join("covimpact_report_test.json");
        report.write_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"File Test\""));

        std::fs::remove_file(path).ok();
    }
}
