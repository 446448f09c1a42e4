//! Pipeline helpers shared by the CLI subcommands.

use covimpact_data::{BusinessRecord, SimConfig, Simulator, read_records_csv, records_to_frame};
use covimpact_output::{ExportFormat, Exporter};
use covimpact_plot::{
    BARPLOT_FILE, BOXPLOT_FILE, ChartStyle, HIST_FILE, SCATTER_FILE, barplot, boxplot, histogram,
    scatter,
};
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};

/// Which charts a `charts` invocation should render.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChartSelection {
    pub hist: bool,
    pub boxplot: bool,
    pub bar: bool,
    pub scatter: bool,
}

impl ChartSelection {
    /// All four charts.
    pub(crate) const fn all() -> Self {
        Self {
            hist: true,
            boxplot: true,
            bar: true,
            scatter: true,
        }
    }

    /// Build the selection from CLI flags; no flags means everything.
    pub(crate) const fn from_flags(hist: bool, boxplot: bool, bar: bool, scatter: bool) -> Self {
        if !hist && !boxplot && !bar && !scatter {
            Self::all()
        } else {
            Self {
                hist,
                boxplot,
                bar,
                scatter,
            }
        }
    }

    fn count(&self) -> u64 {
        u64::from(self.hist)
            + u64::from(self.boxplot)
            + u64::from(self.bar)
            + u64::from(self.scatter)
    }
}

/// Load a dataset CSV, or simulate a fresh population when no input is given.
///
/// Returns both the typed records and the polars frame.
pub(crate) fn load_or_simulate(
    input: Option<PathBuf>,
    config: &SimConfig,
) -> Result<(Vec<BusinessRecord>, DataFrame), Box<dyn std::error::Error>> {
    let records = match input {
        Some(path) => {
            let records = read_records_csv(&path)?;
            println!("Loaded {} businesses from {}", records.len(), path.display());
            records
        }
        None => {
            let simulator = Simulator::new(config.clone())?;
            let records = simulator.generate()?;
            println!(
                "Simulated {} businesses across 5 sectors (seed {})",
                records.len(),
                config.seed
            );
            records
        }
    };

    let df = records_to_frame(&records)?;
    Ok((records, df))
}

/// Write the dataset CSV.
pub(crate) fn write_dataset(
    records: &[BusinessRecord],
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    records.to_vec().export_to_file(path, ExportFormat::Csv)?;
    Ok(())
}

/// Render the selected charts with a progress bar.
pub(crate) fn render_charts(
    df: &DataFrame,
    output_dir: &Path,
    bins: usize,
    selection: ChartSelection,
    style: &ChartStyle,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(selection.count());
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template")
            .progress_chars("█▓░"),
    );
    pb.set_message("Rendering charts...");

    let mut written = Vec::new();

    if selection.hist {
        let path = output_dir.join(HIST_FILE);
        histogram::render_histogram(df, bins, &path, style)?;
        written.push(path);
        pb.inc(1);
    }
    if selection.boxplot {
        let path = output_dir.join(BOXPLOT_FILE);
        boxplot::render_sector_boxplot(df, &path, style)?;
        written.push(path);
        pb.inc(1);
    }
    if selection.bar {
        let path = output_dir.join(BARPLOT_FILE);
        barplot::render_sector_barplot(df, &path, style)?;
        written.push(path);
        pb.inc(1);
    }
    if selection.scatter {
        let path = output_dir.join(SCATTER_FILE);
        scatter::render_scatter(df, &path, style)?;
        written.push(path);
        pb.inc(1);
    }

    pb.finish_with_message(format!("Rendered {} chart(s)", written.len()));
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_defaults_to_all() {
        let sel = ChartSelection::from_flags(false, false, false, false);
        assert!(sel.hist && sel.boxplot && sel.bar && sel.scatter);
        assert_eq!(sel.count(), 4);
    }

    #[test]
    fn test_selection_single_flag() {
        let sel = ChartSelection::from_flags(true, false, false, false);
        assert!(sel.hist);
        assert!(!sel.boxplot && !sel.bar && !sel.scatter);
        assert_eq!(sel.count(), 1);
    }

    #[test]
    fn test_load_or_simulate_without_input() {
        let config = SimConfig {
            n_businesses: 25,
            ..SimConfig::default()
        };
        let (records, df) = load_or_simulate(None, &config).unwrap();
        assert_eq!(records.len(), 25);
        assert_eq!(df.height(), 25);
    }

    #[test]
    fn test_write_and_reload_dataset() {
        let config = SimConfig {
            n_businesses: 10,
            ..SimConfig::default()
        };
        let (records, _) = load_or_simulate(None, &config).unwrap();

        let path = std::env::temp_dir().join("covimpact_pipeline_test.csv");
        write_dataset(&records, &path).unwrap();

        let (reloaded, df) = load_or_simulate(Some(path.clone()), &config).unwrap();
        assert_eq!(reloaded.len(), 10);
        assert_eq!(df.height(), 10);
        assert_eq!(reloaded[0].business_id, records[0].business_id);

        std::fs::remove_file(path).ok();
    }
}
