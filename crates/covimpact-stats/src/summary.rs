//! Summary statistics with interpolated quantiles.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive statistics for a sample of values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryStats {
    /// Number of observations.
    pub count: usize,

    /// Sample mean.
    pub mean: f64,

    /// Sample standard deviation (n - 1 denominator; 0 for a single value).
    pub std: f64,

    /// Minimum observation.
    pub min: f64,

    /// First quartile (linear interpolation).
    pub q1: f64,

    /// Median.
    pub median: f64,

    /// Third quartile (linear interpolation).
    pub q3: f64,

    /// Maximum observation.
    pub max: f64,
}

impl SummaryStats {
    /// Compute summary statistics for a sample.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty sample or non-finite values.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(StatsError::EmptyInput("summary statistics"));
        }
        if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::NonFinite(idx));
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let ss = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
            (ss / (count - 1) as f64).sqrt()
        } else {
            0.0
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Ok(Self {
            count,
            mean,
            std,
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} mean={:.2} std={:.2} min={:.2} q1={:.2} median={:.2} q3={:.2} max={:.2}",
            self.count, self.mean, self.std, self.min, self.q1, self.median, self.q3, self.max
        )
    }
}

/// Interpolated quantile of a pre-sorted sample.
///
/// Uses the linear interpolation rule at position `q * (n - 1)`.
/// The slice must be non-empty and sorted ascending.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_known_sample() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = SummaryStats::from_values(&values).unwrap();

        assert_eq!(stats.count, 8);
        assert_abs_diff_eq!(stats.mean, 5.0, epsilon = 1e-12);
        // Sample variance of this classic example is 32/7.
        assert_abs_diff_eq!(stats.std, (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(stats.min, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.max, 9.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.median, 4.5, epsilon = 1e-12);
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(0.25, 2.0)]
    #[case(0.5, 3.0)]
    #[case(0.75, 4.0)]
    #[case(1.0, 5.0)]
    fn test_quantiles_on_five_points(#[case] q: f64, #[case] expected: f64) {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(quantile_sorted(&sorted, q), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_quantile_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        // 0.5 * 3 = 1.5 -> halfway between 2 and 3
        assert_abs_diff_eq!(quantile_sorted(&sorted, 0.5), 2.5, epsilon = 1e-12);
        // 0.25 * 3 = 0.75 -> 1 + 0.75
        assert_abs_diff_eq!(quantile_sorted(&sorted, 0.25), 1.75, epsilon = 1e-12);
    }

    #[test]
    fn test_single_value() {
        let stats = SummaryStats::from_values(&[3.5]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.median, 3.5);
        assert_eq!(stats.q1, 3.5);
        assert_eq!(stats.q3, 3.5);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            SummaryStats::from_values(&[]),
            Err(StatsError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            SummaryStats::from_values(&[1.0, f64::NAN, 2.0]),
            Err(StatsError::NonFinite(1))
        ));
    }

    #[test]
    fn test_iqr() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = SummaryStats::from_values(&values).unwrap();
        assert_abs_diff_eq!(stats.iqr(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let stats = SummaryStats::from_values(&[1.0, 2.0, 3.0]).unwrap();
        let s = format!("{stats}");
        assert!(s.contains("n=3"));
        assert!(s.contains("mean=2.00"));
    }
}
