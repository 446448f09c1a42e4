//! Per-sector boxplot of revenue decline.

use crate::error::{PlotError, Result};
use crate::style::ChartStyle;
use covimpact_data::{Sector, records_from_frame};
use covimpact_stats::FiveNumberSummary;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::path::Path;

/// Render one box-and-whisker per sector over the decline column.
///
/// Boxes span q1..q3 with a median line; whiskers follow the 1.5 IQR rule
/// and outliers are drawn as hollow circles. Sectors appear in taxonomy
/// order on the x axis; sectors absent from the dataset are skipped.
pub fn render_sector_boxplot(df: &DataFrame, path: &Path, style: &ChartStyle) -> Result<()> {
    let records = records_from_frame(df)?;
    if records.is_empty() {
        return Err(PlotError::EmptyDataset("sector boxplot"));
    }

    // Sector -> decline values, in taxonomy order.
    let groups: Vec<(Sector, Vec<f64>)> = Sector::all()
        .into_iter()
        .map(|sector| {
            let values: Vec<f64> = records
                .iter()
                .filter(|r| r.sector == sector)
                .map(|r| r.decline_pct)
                .collect();
            (sector, values)
        })
        .filter(|(_, values)| !values.is_empty())
        .collect();

    let summaries: Vec<(Sector, FiveNumberSummary)> = groups
        .iter()
        .map(|(sector, values)| Ok((*sector, FiveNumberSummary::from_values(values)?)))
        .collect::<Result<_>>()?;

    let y_max = summaries
        .iter()
        .map(|(_, s)| s.max)
        .fold(0.0_f64, f64::max)
        * 1.1;
    let n = summaries.len() as f64;
    let labels: Vec<&'static str> = summaries.iter().map(|(s, _)| s.name()).collect();

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| PlotError::Draw(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Revenue Decline Percentage by Sector",
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
        .y_desc("Revenue Decline (%)")
        .x_labels(labels.len())
        .x_label_formatter(&|x| {
            let idx = x.round() as usize;
            labels.get(idx).copied().unwrap_or("").to_string()
        })
        .disable_x_mesh()
        .draw()
        .map_err(|e| PlotError::Draw(e.to_string()))?;

    for (i, (sector, summary)) in summaries.iter().enumerate() {
        let x = i as f64;
        let color = ChartStyle::sector_color(*sector);
        let half_box = 0.3;
        let half_cap = 0.15;

        // Box from q1 to q3.
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x - half_box, summary.q1), (x + half_box, summary.q3)],
                color.mix(0.4).filled(),
            )))
            .map_err(|e| PlotError::Draw(e.to_string()))?;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x - half_box, summary.q1), (x + half_box, summary.q3)],
                color.stroke_width(2),
            )))
            .map_err(|e| PlotError::Draw(e.to_string()))?;

        // Median line.
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x - half_box, summary.median), (x + half_box, summary.median)],
                BLACK.stroke_width(2),
            )))
            .map_err(|e| PlotError::Draw(e.to_string()))?;

        // Whiskers with end caps.
        let whisker_segments = [
            vec![(x, summary.q3), (x, summary.whisker_high)],
            vec![(x, summary.q1), (x, summary.whisker_low)],
            vec![
                (x - half_cap, summary.whisker_high),
                (x + half_cap, summary.whisker_high),
            ],
            vec![
                (x - half_cap, summary.whisker_low),
                (x + half_cap, summary.whisker_low),
            ],
        ];
        for segment in whisker_segments {
            chart
                .draw_series(std::iter::once(PathElement::new(segment, BLACK)))
                .map_err(|e| PlotError::Draw(e.to_string()))?;
        }

        // Outliers.
        chart
            .draw_series(
                summary
                    .outliers
                    .iter()
                    .map(|&y| Circle::new((x, y), 3, BLACK.stroke_width(1))),
            )
            .map_err(|e| PlotError::Draw(e.to_string()))?;
    }

    root.present().map_err(|e| PlotError::Draw(e.to_string()))?;
    Ok(())
}
