//! Equal-width histogram binning.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};

/// A single histogram bin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HistogramBin {
    /// Left edge (inclusive).
    pub lower: f64,

    /// Right edge (exclusive, except for the last bin).
    pub upper: f64,

    /// Number of observations in the bin.
    pub count: usize,
}

impl HistogramBin {
    /// Center of the bin.
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }
}

/// Equal-width histogram over the observed data range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Histogram {
    /// Bins in ascending order.
    pub bins: Vec<HistogramBin>,

    /// Width of each bin.
    pub bin_width: f64,

    /// Total number of observations.
    pub total: usize,
}

impl Histogram {
    /// Bin values into `n_bins` equal-width bins over `[min, max]`.
    ///
    /// The last bin is right-inclusive so the maximum lands in it. A
    /// degenerate range (all values equal) is widened to a unit-width bin
    /// centered on the value.
    ///
    /// # Errors
    ///
    /// Returns an error for empty input, zero bins, or non-finite values.
    pub fn compute(values: &[f64], n_bins: usize) -> Result<Self> {
        if values.is_empty() {
            return Err(StatsError::EmptyInput("histogram"));
        }
        if n_bins == 0 {
            return Err(StatsError::InvalidBinCount);
        }
        if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::NonFinite(idx));
        }

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let (min, max) = if (max - min).abs() < f64::EPSILON {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };

        let bin_width = (max - min) / n_bins as f64;
        let mut counts = vec![0usize; n_bins];
        for &v in values {
            let mut idx = ((v - min) / bin_width) as usize;
            if idx >= n_bins {
                idx = n_bins - 1;
            }
            counts[idx] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: min + i as f64 * bin_width,
                upper: min + (i + 1) as f64 * bin_width,
                count,
            })
            .collect();

        Ok(Self {
            bins,
            bin_width,
            total: values.len(),
        })
    }

    /// Largest bin count (0 for an all-empty histogram).
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}
