#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/covimpact/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod barplot;
pub mod boxplot;
pub mod error;
pub mod histogram;
pub mod scatter;
pub mod style;

pub use error::{PlotError, Result};
pub use style::ChartStyle;

use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};

/// File name of the decline histogram chart.
pub const HIST_FILE: &str = "hist_decline_percent.png";
/// File name of the per-sector boxplot chart.
pub const BOXPLOT_FILE: &str = "boxplot_decline_by_sector.png";
/// File name of the per-sector average decline bar chart.
pub const BARPLOT_FILE: &str = "barplot_avg_decline_by_sector.png";
/// File name of the pre/post revenue scatter chart.
pub const SCATTER_FILE: &str = "scatter_pre_vs_post_revenue.png";

/// Render all four standard charts into `output_dir`.
///
/// The directory is created if it does not exist. Returns the paths of the
/// written images in render order.
///
/// # Errors
///
/// Returns an error if the dataset is empty or malformed, or if a chart
/// fails to render.
pub fn render_all(
    df: &DataFrame,
    output_dir: &Path,
    bins: usize,
    style: &ChartStyle,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;

    let hist_path = output_dir.join(HIST_FILE);
    histogram::render_histogram(df, bins, &hist_path, style)?;

    let box_path = output_dir.join(BOXPLOT_FILE);
    boxplot::render_sector_boxplot(df, &box_path, style)?;

    let bar_path = output_dir.join(BARPLOT_FILE);
    barplot::render_sector_barplot(df, &bar_path, style)?;

    let scatter_path = output_dir.join(SCATTER_FILE);
    scatter::render_scatter(df, &scatter_path, style)?;

    Ok(vec![hist_path, box_path, bar_path, scatter_path])
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use covimpact_data::{SimConfig, Simulator};

    #[test]
    fn test_render_all_writes_four_files() {
        let df = Simulator::new(SimConfig {
            n_businesses: 120,
            ..SimConfig::default()
        })
        .unwrap()
        .generate_frame()
        .unwrap();

        let dir = std::env::temp_dir().join("covimpact_render_all_test");
        let paths = render_all(&df, &dir, 20, &ChartStyle::default()).unwrap();

        assert_eq!(paths.len(), 4);
        for path in &paths {
            let meta = std::fs::metadata(path).unwrap();
            assert!(meta.len() > 0, "{} is empty", path.display());
        }

        std::fs::remove_dir_all(dir).ok();
    }
}
