#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/covimpact/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod boxplot;
pub mod error;
pub mod histogram;
pub mod kde;
pub mod sector_stats;
pub mod summary;

pub use boxplot::FiveNumberSummary;
pub use error::{Result, StatsError};
pub use histogram::{Histogram, HistogramBin};
pub use kde::GaussianKde;
pub use sector_stats::{SectorStats, extract_column, sector_breakdown};
pub use summary::SummaryStats;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
