//! Gaussian kernel density estimation.
//!
//! Provides the smooth density curve drawn over the decline histogram.
//! Bandwidth follows Scott's rule: `sigma * n^(-1/5)`.

use crate::error::{Result, StatsError};

const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// Gaussian kernel density estimator fitted to a sample.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Fit a KDE to a sample using Scott's rule bandwidth.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty sample or non-finite values. A
    /// zero-variance sample gets a small fixed bandwidth so the density
    /// stays well defined.
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(StatsError::EmptyInput("kernel density estimate"));
        }
        if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::NonFinite(idx));
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = if values.len() > 1 {
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
        } else {
            0.0
        };
        let sigma = variance.sqrt();
        let bandwidth = if sigma > 0.0 {
            sigma * n.powf(-0.2)
        } else {
            1e-3
        };

        Ok(Self {
            samples: values.to_vec(),
            bandwidth,
        })
    }

    /// Bandwidth in data units.
    pub const fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Evaluate the density at a point.
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.samples.len() as f64;
        let h = self.bandwidth;
        let sum: f64 = self
            .samples
            .iter()
            .map(|&xi| {
                let u = (x - xi) / h;
                (-0.5 * u * u).exp()
            })
            .sum();
        sum / (n * h * SQRT_2PI)
    }

    /// Sample the density curve at `n_points` evenly spaced points across the
    /// data range, padded by one bandwidth on each side.
    pub fn sample_curve(&self, n_points: usize) -> Vec<(f64, f64)> {
        if n_points == 0 {
            return Vec::new();
        }
        let min = self.samples.iter().cloned().fold(f64::INFINITY, f64::min) - self.bandwidth;
        let max = self
            .samples
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max)
            + self.bandwidth;
        if n_points == 1 {
            let mid = (min + max) / 2.0;
            return vec![(mid, self.evaluate(mid))];
        }
        let step = (max - min) / (n_points - 1) as f64;
        (0..n_points)
            .map(|i| {
                let x = min + i as f64 * step;
                (x, self.evaluate(x))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_density_is_positive_and_peaks_near_data() {
        let values = [0.0, 0.1, -0.1, 0.05, -0.05];
        let kde = GaussianKde::fit(&values).unwrap();
        assert!(kde.evaluate(0.0) > kde.evaluate(5.0));
        assert!(kde.evaluate(5.0) >= 0.0);
    }

    #[test]
    fn test_density_integrates_to_one() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let kde = GaussianKde::fit(&values).unwrap();

        // Trapezoidal integration over a wide range.
        let (a, b) = (-20.0, 26.0);
        let n = 4000;
        let step = (b - a) / n as f64;
        let mut integral = 0.0;
        for i in 0..n {
            let x0 = a + i as f64 * step;
            let x1 = x0 + step;
            integral += (kde.evaluate(x0) + kde.evaluate(x1)) / 2.0 * step;
        }
        assert_abs_diff_eq!(integral, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_scott_bandwidth() {
        let values: Vec<f64> = (0..32).map(|i| i as f64).collect();
        let kde = GaussianKde::fit(&values).unwrap();
        let mean = 15.5;
        let sigma = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 31.0).sqrt();
        assert_abs_diff_eq!(
            kde.bandwidth(),
            sigma * 32.0_f64.powf(-0.2),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_zero_variance_sample() {
        let kde = GaussianKde::fit(&[2.0, 2.0, 2.0]).unwrap();
        assert!(kde.bandwidth() > 0.0);
        assert!(kde.evaluate(2.0).is_finite());
    }

    #[test]
    fn test_sample_curve_span() {
        let values = [0.0, 10.0];
        let kde = GaussianKde::fit(&values).unwrap();
        let curve = kde.sample_curve(50);
        assert_eq!(curve.len(), 50);
        assert!(curve.first().unwrap().0 < 0.0);
        assert!(curve.last().unwrap().0 > 10.0);
        // x values are ascending
        assert!(curve.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(GaussianKde::fit(&[]).is_err());
    }
}
