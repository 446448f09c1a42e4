//! The comprehensive impact summary.
//!
//! Aggregates the dataset into overall and per-sector impact metrics and
//! renders them as an ASCII table, Markdown, or via `Display`.

use chrono::{DateTime, Utc};
use covimpact_data::record::{COL_DECLINE_PCT, COL_POST_REVENUE, COL_PRE_REVENUE, COL_SECTOR};
use covimpact_stats::{StatsError, SummaryStats, extract_column};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur while building the impact summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Statistics error.
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    /// Polars error.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    /// Dataset has no rows.
    #[error("Cannot summarize an empty dataset")]
    EmptyDataset,
}

/// Impact metrics for one sector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectorImpact {
    /// Sector name.
    pub sector: String,

    /// Number of businesses.
    pub count: u32,

    /// Mean revenue decline (%).
    pub mean_decline: f64,

    /// Median revenue decline (%).
    pub median_decline: f64,

    /// Mean pre-COVID revenue (thousands).
    pub mean_pre_revenue: f64,

    /// Mean post-COVID revenue (thousands).
    pub mean_post_revenue: f64,
}

/// Comprehensive summary of the pandemic's revenue impact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImpactSummary {
    /// Summary generation timestamp.
    pub generated_at: DateTime<Utc>,

    /// Number of businesses in the dataset.
    pub n_businesses: usize,

    /// Summary statistics of the decline percentage.
    pub decline: SummaryStats,

    /// Total pre-COVID revenue across all businesses (thousands).
    pub total_pre_revenue: f64,

    /// Total post-COVID revenue across all businesses (thousands).
    pub total_post_revenue: f64,

    /// Per-sector impact, hardest hit first.
    pub sectors: Vec<SectorImpact>,
}

impl ImpactSummary {
    /// Build the summary from a dataset frame.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty frame or missing columns.
    pub fn from_frame(df: &DataFrame) -> Result<Self, SummaryError> {
        if df.height() == 0 {
            return Err(SummaryError::EmptyDataset);
        }

        let declines = extract_column(df, COL_DECLINE_PCT)?;
        let decline = SummaryStats::from_values(&declines)?;

        let pre = extract_column(df, COL_PRE_REVENUE)?;
        let post = extract_column(df, COL_POST_REVENUE)?;
        let total_pre_revenue: f64 = pre.iter().sum();
        let total_post_revenue: f64 = post.iter().sum();

        let grouped = df
            .clone()
            .lazy()
            .group_by([col(COL_SECTOR)])
            .agg([
                col(COL_DECLINE_PCT).count().alias("count"),
                col(COL_DECLINE_PCT).mean().alias("mean_decline"),
                col(COL_DECLINE_PCT).median().alias("median_decline"),
                col(COL_PRE_REVENUE).mean().alias("mean_pre"),
                col(COL_POST_REVENUE).mean().alias("mean_post"),
            ])
            .sort(
                ["mean_decline"],
                SortMultipleOptions::default().with_order_descending(true),
            )
            .collect()?;

        let names = grouped.column(COL_SECTOR)?.str()?;
        let counts = grouped.column("count")?.cast(&DataType::UInt32)?;
        let counts = counts.u32()?;
        let means = grouped.column("mean_decline")?.f64()?;
        let medians = grouped.column("median_decline")?.f64()?;
        let mean_pres = grouped.column("mean_pre")?.f64()?;
        let mean_posts = grouped.column("mean_post")?.f64()?;

        let missing = || StatsError::MissingColumn(COL_SECTOR.to_string());
        let mut sectors = Vec::with_capacity(grouped.height());
        for i in 0..grouped.height() {
            sectors.push(SectorImpact {
                sector: names.get(i).ok_or_else(missing)?.to_string(),
                count: counts.get(i).ok_or_else(missing)?,
                mean_decline: means.get(i).ok_or_else(missing)?,
                median_decline: medians.get(i).ok_or_else(missing)?,
                mean_pre_revenue: mean_pres.get(i).ok_or_else(missing)?,
                mean_post_revenue: mean_posts.get(i).ok_or_else(missing)?,
            });
        }

        Ok(Self {
            generated_at: Utc::now(),
            n_businesses: df.height(),
            decline,
            total_pre_revenue,
            total_post_revenue,
            sectors,
        })
    }

    /// Total revenue lost to the shock (thousands).
    pub fn total_revenue_loss(&self) -> f64 {
        self.total_pre_revenue - self.total_post_revenue
    }

    /// Aggregate revenue loss as a percentage of pre-COVID revenue.
    pub fn aggregate_loss_pct(&self) -> f64 {
        if self.total_pre_revenue.abs() < 1e-10 {
            return 0.0;
        }
        self.total_revenue_loss() / self.total_pre_revenue * 100.0
    }

    /// Sector with the largest mean decline.
    pub fn hardest_hit(&self) -> Option<&SectorImpact> {
        self.sectors.first()
    }

    /// Sector with the smallest mean decline.
    pub fn least_hit(&self) -> Option<&SectorImpact> {
        self.sectors.last()
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str("\nCOVID-19 Economic Impact Summary\n");
        output.push_str(&format!(
            "Generated: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        output.push_str("\nOverall Impact:\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "  Businesses:               {}\n",
            self.n_businesses
        ));
        output.push_str(&format!(
            "  Mean Decline:             {:.2}%\n",
            self.decline.mean
        ));
        output.push_str(&format!(
            "  Median Decline:           {:.2}%\n",
            self.decline.median
        ));
        output.push_str(&format!(
            "  Decline Range:            {:.2}% to {:.2}%\n",
            self.decline.min, self.decline.max
        ));
        output.push_str(&format!(
            "  Total Pre-COVID Revenue:  ${:.0}k\n",
            self.total_pre_revenue
        ));
        output.push_str(&format!(
            "  Total Post-COVID Revenue: ${:.0}k\n",
            self.total_post_revenue
        ));
        output.push_str(&format!(
            "  Aggregate Revenue Loss:   ${:.0}k ({:.1}%)\n",
            self.total_revenue_loss(),
            self.aggregate_loss_pct()
        ));
        if let Some(sector) = self.hardest_hit() {
            output.push_str(&format!(
                "  Hardest Hit Sector:       {} ({:.2}% mean decline)\n",
                sector.sector, sector.mean_decline
            ));
        }
        if let Some(sector) = self.least_hit() {
            output.push_str(&format!(
                "  Least Hit Sector:         {} ({:.2}% mean decline)\n",
                sector.sector, sector.mean_decline
            ));
        }

        if !self.sectors.is_empty() {
            output.push_str("\nSector Breakdown:\n");
            output.push_str(&"-".repeat(80));
            output.push('\n');
            output.push_str(&format!(
                "{:<16} {:>8} {:>12} {:>14} {:>13} {:>13}\n",
                "Sector", "Count", "Mean Decl.", "Median Decl.", "Mean Pre", "Mean Post"
            ));
            output.push_str(&"-".repeat(80));
            output.push('\n');

            for sector in &self.sectors {
                output.push_str(&format!(
                    "{:<16} {:>8} {:>11.2}% {:>13.2}% {:>12.1}k {:>12.1}k\n",
                    sector.sector,
                    sector.count,
                    sector.mean_decline,
                    sector.median_decline,
                    sector.mean_pre_revenue,
                    sector.mean_post_revenue
                ));
            }
        }

        output.push_str(&"=".repeat(80));
        output.push('\n');

        output
    }

    /// Format as Markdown for documentation.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# COVID-19 Economic Impact Summary\n\n");
        output.push_str(&format!(
            "**Generated:** {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str("## Overall Impact\n\n");
        output.push_str(&format!("- **Businesses:** {}\n", self.n_businesses));
        output.push_str(&format!(
            "- **Mean Decline:** {:.2}%\n",
            self.decline.mean
        ));
        output.push_str(&format!(
            "- **Median Decline:** {:.2}%\n",
            self.decline.median
        ));
        output.push_str(&format!(
            "- **Decline Range:** {:.2}% to {:.2}%\n",
            self.decline.min, self.decline.max
        ));
        output.push_str(&format!(
            "- **Aggregate Revenue Loss:** ${:.0}k ({:.1}%)\n\n",
            self.total_revenue_loss(),
            self.aggregate_loss_pct()
        ));

        if !self.sectors.is_empty() {
            output.push_str("## Sector Breakdown\n\n");
            output.push_str(
                "| Sector | Count | Mean Decline | Median Decline | Mean Pre | Mean Post |\n",
            );
            output.push_str(
                "|--------|-------|--------------|----------------|----------|----------|\n",
            );

            for sector in &self.sectors {
                output.push_str(&format!(
                    "| {} | {} | {:.2}% | {:.2}% | {:.1}k | {:.1}k |\n",
                    sector.sector,
                    sector.count,
                    sector.mean_decline,
                    sector.median_decline,
                    sector.mean_pre_revenue,
                    sector.mean_post_revenue
                ));
            }
        }

        output
    }
}

impl fmt::Display for ImpactSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Impact Summary ({} businesses)", self.n_businesses)?;
        writeln!(f, "  Mean Decline: {:.2}%", self.decline.mean)?;
        writeln!(f, "  Median Decline: {:.2}%", self.decline.median)?;
        writeln!(
            f,
            "  Aggregate Loss: ${:.0}k ({:.1}%)",
            self.total_revenue_loss(),
            self.aggregate_loss_pct()
        )?;
        Ok(())
    }
}
