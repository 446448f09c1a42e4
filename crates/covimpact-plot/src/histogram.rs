//! Decline histogram with a KDE overlay.

use crate::error::{PlotError, Result};
use crate::style::ChartStyle;
use covimpact_data::record::COL_DECLINE_PCT;
use covimpact_stats::{GaussianKde, Histogram, extract_column};
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::path::Path;

/// Render the histogram of revenue decline percentages.
///
/// Bars show per-bin counts; the KDE curve is scaled from density to count
/// units (`density * n * bin_width`) so both share one y axis, matching the
/// look of a count histogram with a density overlay.
pub fn render_histogram(
    df: &DataFrame,
    bins: usize,
    path: &Path,
    style: &ChartStyle,
) -> Result<()> {
    let values = extract_column(df, COL_DECLINE_PCT)?;
    if values.is_empty() {
        return Err(PlotError::EmptyDataset("decline histogram"));
    }

    let hist = Histogram::compute(&values, bins)?;
    let kde = GaussianKde::fit(&values)?;
    let count_scale = values.len() as f64 * hist.bin_width;

    let kde_curve: Vec<(f64, f64)> = kde
        .sample_curve(200)
        .into_iter()
        .map(|(x, d)| (x, d * count_scale))
        .collect();

    let x_min = hist.bins.first().map(|b| b.lower).unwrap_or(0.0);
    let x_max = hist.bins.last().map(|b| b.upper).unwrap_or(1.0);
    let y_max = (hist.max_count() as f64)
        .max(kde_curve.iter().map(|&(_, y)| y).fold(0.0, f64::max))
        * 1.05;

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| PlotError::Draw(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Histogram of Revenue Decline Percentages",
            ("sans-serif", style.caption_size),
        )
        .margin(style.margin)
        .x_label_area_size(style.label_area)
        .y_label_area_size(style.label_area)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| PlotError::Draw(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Revenue Decline (%)")
        .y_desc("Count")
        .draw()
        .map_err(|e| PlotError::Draw(e.to_string()))?;

    let bar_color = RGBColor(135, 206, 235); // sky blue, as the original
    chart
        .draw_series(hist.bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
                bar_color.mix(0.7).filled(),
            )
        }))
        .map_err(|e| PlotError::Draw(e.to_string()))?;
    chart
        .draw_series(
            hist.bins
                .iter()
                .map(|bin| Rectangle::new([(bin.lower, 0.0), (bin.upper, bin.count as f64)], BLUE)),
        )
        .map_err(|e| PlotError::Draw(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(kde_curve, BLUE.stroke_width(2)))
        .map_err(|e| PlotError::Draw(e.to_string()))?
        .label("KDE")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

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
    fn test_render_histogram() {
        let df = Simulator::new(SimConfig {
            n_businesses: 100,
            ..SimConfig::default()
        })
        .unwrap()
        .generate_frame()
        .unwrap();

        let path = std::env::temp_dir().join("covimpact_hist_test.png");
        render_histogram(&df, 30, &path, &ChartStyle::default()).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_column_rejected() {
        use polars::prelude::*;
        let df = DataFrame::new(vec![Series::new("x".into(), vec![1.0]).into()]).unwrap();
        let path = std::env::temp_dir().join("covimpact_hist_missing.png");
        assert!(render_histogram(&df, 10, &path, &ChartStyle::default()).is_err());
    }
}
