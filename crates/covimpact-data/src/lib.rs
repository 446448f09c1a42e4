#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/covimpact/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod record;
pub mod sector;
pub mod simulate;

pub use dataset::{read_records_csv, records_from_frame, records_to_frame, validate_frame};
pub use error::{DataError, Result};
pub use record::BusinessRecord;
pub use sector::Sector;
pub use simulate::{SimConfig, Simulator};

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
