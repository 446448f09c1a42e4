//! Pre- vs post-COVID revenue scatter plot.

use crate::error::{PlotError, Result};
use crate::style::ChartStyle;
use covimpact_data::{Sector, records_from_frame};
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::path::Path;

/// Render the pre- vs post-COVID revenue scatter, colored by sector, with a
/// dashed `y = x` "No Change" reference line.
pub fn render_scatter(df: &DataFrame, path: &Path, style: &ChartStyle) -> Result<()> {
    let records = records_from_frame(df)?;
    if records.is_empty() {
        return Err(PlotError::EmptyDataset("revenue scatter"));
    }

    let max_pre = records
        .iter()
        .map(|r| r.pre_covid_revenue)
        .fold(0.0_f64, f64::max);
    let axis_max = max_pre * 1.05;

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| PlotError::Draw(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Pre-COVID vs. Post-COVID Revenue",
            ("sans-serif", style.caption_size),
        )
        .margin(style.margin)
        .x_label_area_size(style.label_area)
        .y_label_area_size(style.label_area)
        .build_cartesian_2d(0.0..axis_max, 0.0..axis_max)
        .map_err(|e| PlotError::Draw(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Pre-COVID Revenue (thousands)")
        .y_desc("Post-COVID Revenue (thousands)")
        .draw()
        .map_err(|e| PlotError::Draw(e.to_string()))?;

    for sector in Sector::all() {
        let color = ChartStyle::sector_color(sector);
        let points: Vec<(f64, f64)> = records
            .iter()
            .filter(|r| r.sector == sector)
            .map(|r| (r.pre_covid_revenue, r.post_covid_revenue))
            .collect();
        if points.is_empty() {
            continue;
        }

        chart
            .draw_series(
                points
                    .into_iter()
                    .map(move |xy| Circle::new(xy, 3, color.mix(0.7).filled())),
            )
            .map_err(|e| PlotError::Draw(e.to_string()))?
            .label(sector.name())
            .legend(move |(x, y)| Circle::new((x + 10, y), 3, color.filled()));
    }

    // Reference line: a business on this line lost no revenue.
    chart
        .draw_series(DashedLineSeries::new(
            vec![(0.0, 0.0), (max_pre, max_pre)],
            8,
            6,
            RED.stroke_width(2),
        ))
        .map_err(|e| PlotError::Draw(e.to_string()))?
        .label("No Change")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| PlotError::Draw(e.to_string()))?;

    root.present().map_err(|e| PlotError::Draw(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use covimpact_data::{SimConfig, Simulator};

    #[test]
    fn test_render_scatter() {
        let df = Simulator::new(SimConfig {
            n_businesses: 150,
            ..SimConfig::default()
        })
        .unwrap()
        .generate_frame()
        .unwrap();

        let path = std::env::temp_dir().join("covimpact_scatter_test.png");
        render_scatter(&df, &path, &ChartStyle::default()).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_empty_frame_rejected() {
        let df = covimpact_data::records_to_frame(&[]).unwrap();
        let path = std::env::temp_dir().join("covimpact_scatter_empty.png");
        assert!(render_scatter(&df, &path, &ChartStyle::default()).is_err());
    }
}
