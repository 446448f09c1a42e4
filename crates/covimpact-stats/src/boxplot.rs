//! Five-number summaries for boxplots.

use crate::error::{Result, StatsError};
use crate::summary::quantile_sorted;
use serde::{Deserialize, Serialize};

/// Five-number summary with Tukey whiskers and outliers.
///
/// Whiskers extend to the most extreme observations within 1.5 × IQR of the
/// quartiles; anything beyond is collected as an outlier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FiveNumberSummary {
    /// Minimum observation.
    pub min: f64,

    /// First quartile.
    pub q1: f64,

    /// Median.
    pub median: f64,

    /// Third quartile.
    pub q3: f64,

    /// Maximum observation.
    pub max: f64,

    /// Lower whisker (smallest observation >= q1 - 1.5 IQR).
    pub whisker_low: f64,

    /// Upper whisker (largest observation <= q3 + 1.5 IQR).
    pub whisker_high: f64,

    /// Observations beyond the whiskers.
    pub outliers: Vec<f64>,
}

impl FiveNumberSummary {
    /// Compute the summary for a sample.
    ///
    /// # Errors
    ///
    /// Returns an error for empty input or non-finite values.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(StatsError::EmptyInput("five-number summary"));
        }
        if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::NonFinite(idx));
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let fence_low = q1 - 1.5 * iqr;
        let fence_high = q3 + 1.5 * iqr;

        let whisker_low = sorted
            .iter()
            .cloned()
            .find(|&v| v >= fence_low)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .cloned()
            .find(|&v| v <= fence_high)
            .unwrap_or(q3);
        let outliers: Vec<f64> = sorted
            .iter()
            .cloned()
            .filter(|&v| v < fence_low || v > fence_high)
            .collect();

        Ok(Self {
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[sorted.len() - 1],
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_no_outliers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let s = FiveNumberSummary::from_values(&values).unwrap();
        assert_abs_diff_eq!(s.median, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.whisker_low, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.whisker_high, 5.0, epsilon = 1e-12);
        assert!(s.outliers.is_empty());
    }

    #[test]
    fn test_outlier_detected() {
        // q1 = 2, q3 = 4, iqr = 2 -> fences at -1 and 7; 100 is an outlier.
        let values = [1.0, 2.0, 3.0, 4.0, 100.0];
        let s = FiveNumberSummary::from_values(&values).unwrap();
        assert_eq!(s.outliers, vec![100.0]);
        assert_abs_diff_eq!(s.max, 100.0, epsilon = 1e-12);
        assert!(s.whisker_high < 100.0);
    }

    #[test]
    fn test_whiskers_clamped_to_data() {
        let values = [10.0, 11.0, 12.0, 13.0, 14.0];
        let s = FiveNumberSummary::from_values(&values).unwrap();
        // Fences are wider than the data; whiskers stop at min/max.
        assert_abs_diff_eq!(s.whisker_low, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.whisker_high, 14.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_value() {
        let s = FiveNumberSummary::from_values(&[7.0]).unwrap();
        assert_eq!(s.min, 7.0);
        assert_eq!(s.max, 7.0);
        assert_eq!(s.median, 7.0);
        assert!(s.outliers.is_empty());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(FiveNumberSummary::from_values(&[]).is_err());
    }

    #[test]
    fn test_low_outlier() {
        let values = [-100.0, 10.0, 11.0, 12.0, 13.0];
        let s = FiveNumberSummary::from_values(&values).unwrap();
        assert_eq!(s.outliers, vec![-100.0]);
        assert!(s.whisker_low > -100.0);
    }
}
