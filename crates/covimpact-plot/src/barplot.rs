//! Bar chart of average decline per sector.

use crate::error::{PlotError, Result};
use crate::style::ChartStyle;
use covimpact_data::Sector;
use covimpact_stats::sector_breakdown;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::path::Path;

/// Render the average revenue decline per sector as a bar chart.
///
/// Bars are ordered hardest hit first and colored with the sector palette.
pub fn render_sector_barplot(df: &DataFrame, path: &Path, style: &ChartStyle) -> Result<()> {
    let rows = sector_breakdown(df)?;
    if rows.is_empty() {
        return Err(PlotError::EmptyDataset("sector bar chart"));
    }

    let y_max = rows
        .iter()
        .map(|r| r.mean_decline)
        .fold(0.0_f64, f64::max)
        * 1.15;
    let n = rows.len() as f64;
    let labels: Vec<String> = rows.iter().map(|r| r.sector.clone()).collect();

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| PlotError::Draw(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Average Revenue Decline Percentage by Sector",
            ("sans-serif", style.caption_size),
        )
        .margin(style.margin)
        .x_label_area_size(style.label_area)
        .y_label_area_size(style.label_area)
        .build_cartesian_2d(-0.5..(n - 0.5), 0.0..y_max)
        .map_err(|e| PlotError::Draw(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Sector")
        .y_desc("Average Revenue Decline (%)")
        .x_labels(labels.len())
        .x_label_formatter(&|x| {
            let idx = x.round() as usize;
            labels.get(idx).cloned().unwrap_or_default()
        })
        .disable_x_mesh()
        .draw()
        .map_err(|e| PlotError::Draw(e.to_string()))?;

    for (i, row) in rows.iter().enumerate() {
        let x = i as f64;
        let color = Sector::from_name(&row.sector)
            .map(ChartStyle::sector_color)
            .unwrap_or(RGBColor(128, 128, 128));

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x - 0.35, 0.0), (x + 0.35, row.mean_decline)],
                color.mix(0.8).filled(),
            )))
            .map_err(|e| PlotError::Draw(e.to_string()))?;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x - 0.35, 0.0), (x + 0.35, row.mean_decline)],
                color,
            )))
            .map_err(|e| PlotError::Draw(e.to_string()))?;
    }

    root.present().map_err(|e| PlotError::Draw(e.to_string()))?;
    Ok(())
}
