//! covimpact CLI binary.
//!
//! Provides the command-line interface for the COVID-19 economic impact
//! analysis pipeline.

mod pipeline;

use clap::{Parser, Subcommand};
use covimpact::SimConfig;
use covimpact_output::{DATASET_FILE, ExportFormat, Exporter, ImpactSummary, ReportBuilder};
use covimpact_plot::ChartStyle;
use covimpact_stats::sector_breakdown;
use pipeline::{ChartSelection, load_or_simulate, render_charts, write_dataset};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "covimpact")]
#[command(about = "COVID-19 economic impact analysis on business revenues", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: simulate, export CSV, render charts, summarize
    Run {
        /// Number of businesses to simulate
        #[arg(long, default_value = "1000")]
        businesses: usize,

        /// RNG seed for reproducible runs
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Directory for the CSV and chart images
        #[arg(long, default_value = "output_images")]
        output_dir: PathBuf,

        /// Number of histogram bins
        #[arg(long, default_value = "30")]
        bins: usize,

        /// Summary format (text, markdown or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Skip chart rendering
        #[arg(long)]
        no_charts: bool,
    },

    /// Generate the dataset CSV only
    Simulate {
        /// Number of businesses to simulate
        #[arg(long, default_value = "1000")]
        businesses: usize,

        /// RNG seed for reproducible runs
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Output CSV path
        #[arg(long, default_value = DATASET_FILE)]
        output: PathBuf,
    },

    /// Compute and print the per-sector statistics
    Analyze {
        /// Dataset CSV to analyze (simulates a fresh dataset if omitted)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Number of businesses when simulating
        #[arg(long, default_value = "1000")]
        businesses: usize,

        /// RNG seed when simulating
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Render the impact charts
    Charts {
        /// Dataset CSV to chart (simulates a fresh dataset if omitted)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Number of businesses when simulating
        #[arg(long, default_value = "1000")]
        businesses: usize,

        /// RNG seed when simulating
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Directory for the chart images
        #[arg(long, default_value = "output_images")]
        output_dir: PathBuf,

        /// Number of histogram bins
        #[arg(long, default_value = "30")]
        bins: usize,

        /// Render only the decline histogram
        #[arg(long)]
        hist: bool,

        /// Render only the sector boxplot
        #[arg(long)]
        boxplot: bool,

        /// Render only the sector bar chart
        #[arg(long)]
        bar: bool,

        /// Render only the revenue scatter plot
        #[arg(long)]
        scatter: bool,
    },

    /// Write the full impact report as JSON
    Report {
        /// Dataset CSV to report on (simulates a fresh dataset if omitted)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Number of businesses when simulating
        #[arg(long, default_value = "1000")]
        businesses: usize,

        /// RNG seed when simulating
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Output JSON path
        #[arg(long, default_value = "impact_report.json")]
        output: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            businesses,
            seed,
            output_dir,
            bins,
            format,
            no_charts,
        } => run_pipeline(businesses, seed, &output_dir, bins, &format, no_charts),
        Commands::Simulate {
            businesses,
            seed,
            output,
        } => simulate_dataset(businesses, seed, &output),
        Commands::Analyze {
            input,
            businesses,
            seed,
            format,
        } => analyze(input, businesses, seed, &format),
        Commands::Charts {
            input,
            businesses,
            seed,
            output_dir,
            bins,
            hist,
            boxplot,
            bar,
            scatter,
        } => {
            let selection = ChartSelection::from_flags(hist, boxplot, bar, scatter);
            charts(input, businesses, seed, &output_dir, bins, selection)
        }
        Commands::Report {
            input,
            businesses,
            seed,
            output,
        } => report(input, businesses, seed, &output),
    }
}

fn sim_config(businesses: usize, seed: u64) -> SimConfig {
    SimConfig {
        n_businesses: businesses,
        seed,
        ..SimConfig::default()
    }
}

fn run_pipeline(
    businesses: usize,
    seed: u64,
    output_dir: &Path,
    bins: usize,
    format: &str,
    no_charts: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = sim_config(businesses, seed);
    let (records, df) = load_or_simulate(None, &config)?;

    std::fs::create_dir_all(output_dir)?;
    let csv_path = output_dir.join(DATASET_FILE);
    write_dataset(&records, &csv_path)?;
    println!("Data saved to: {}", csv_path.display());

    if !no_charts {
        let written = render_charts(
            &df,
            output_dir,
            bins,
            ChartSelection::all(),
            &ChartStyle::default(),
        )?;
        for path in written {
            println!("Chart saved to: {}", path.display());
        }
    }

    let summary = ImpactSummary::from_frame(&df)?;
    match format {
        "text" => print!("{}", summary.to_ascii_table()),
        "markdown" => print!("{}", summary.to_markdown()),
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        other => return Err(format!("Unknown format: {}", other).into()),
    }

    Ok(())
}

fn simulate_dataset(
    businesses: usize,
    seed: u64,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = sim_config(businesses, seed);
    let (records, _) = load_or_simulate(None, &config)?;
    write_dataset(&records, output)?;
    println!(
        "Simulated {} businesses (seed {}), data saved to: {}",
        records.len(),
        seed,
        output.display()
    );
    Ok(())
}

fn analyze(
    input: Option<PathBuf>,
    businesses: usize,
    seed: u64,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = sim_config(businesses, seed);
    let (_, df) = load_or_simulate(input, &config)?;

    match format {
        "text" => {
            let summary = ImpactSummary::from_frame(&df)?;
            print!("{}", summary.to_ascii_table());
        }
        "json" => {
            let rows = sector_breakdown(&df)?;
            println!("{}", rows.export_to_string(ExportFormat::PrettyJson)?);
        }
        other => return Err(format!("Unknown format: {}", other).into()),
    }

    Ok(())
}

fn charts(
    input: Option<PathBuf>,
    businesses: usize,
    seed: u64,
    output_dir: &Path,
    bins: usize,
    selection: ChartSelection,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = sim_config(businesses, seed);
    let (_, df) = load_or_simulate(input, &config)?;

    let written = render_charts(&df, output_dir, bins, selection, &ChartStyle::default())?;
    for path in written {
        println!("Chart saved to: {}", path.display());
    }

    Ok(())
}

fn report(
    input: Option<PathBuf>,
    businesses: usize,
    seed: u64,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = sim_config(businesses, seed);
    let (_, df) = load_or_simulate(input, &config)?;

    let summary = ImpactSummary::from_frame(&df)?;
    let report = ReportBuilder::new()
        .config(serde_json::to_value(&config)?)
        .contents(serde_json::to_value(&summary)?)
        .build()?;
    report.write_to_file(output)?;
    println!("Report saved to: {}", output.display());

    Ok(())
}
