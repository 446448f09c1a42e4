#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/covimpact/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export main types from sub-crates
pub use covimpact_data as data;
pub use covimpact_output as output;
pub use covimpact_plot as plot;
pub use covimpact_stats as stats;

// Re-export common types
pub use covimpact_data::{BusinessRecord, Sector, SimConfig, Simulator};
pub use covimpact_output::{ExportFormat, Exporter, ImpactSummary};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_end_to_end_through_facade() {
        let df = Simulator::new(SimConfig {
            n_businesses: 100,
            ..SimConfig::default()
        })
        .unwrap()
        .generate_frame()
        .unwrap();

        let summary = ImpactSummary::from_frame(&df).unwrap();
        assert_eq!(summary.n_businesses, 100);
    }
}
