//! Seeded simulation of the business universe.
//!
//! Generates pre-COVID revenues from a clipped normal distribution and
//! applies a uniform drop factor to obtain post-COVID revenues. The same
//! seed always yields the same population.

use crate::dataset::records_to_frame;
use crate::error::{DataError, Result};
use crate::record::BusinessRecord;
use crate::sector::Sector;
use polars::prelude::DataFrame;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Uniform};
use serde::{Deserialize, Serialize};

/// Configuration for the revenue simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimConfig {
    /// Number of businesses to generate (default: 1000)
    pub n_businesses: usize,
    /// RNG seed for reproducibility (default: 42)
    pub seed: u64,
    /// Mean of the pre-COVID revenue distribution, in thousands (default: 500)
    pub revenue_mean: f64,
    /// Standard deviation of the pre-COVID revenue distribution (default: 150)
    pub revenue_std: f64,
    /// Lower clip for pre-COVID revenue; the upper side is unclipped (default: 100)
    pub revenue_floor: f64,
    /// Minimum revenue drop factor (default: 0.3)
    pub drop_min: f64,
    /// Maximum revenue drop factor (default: 1.0)
    pub drop_max: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            n_businesses: 1000,
            seed: 42,
            revenue_mean: 500.0,
            revenue_std: 150.0,
            revenue_floor: 100.0,
            drop_min: 0.3,
            drop_max: 1.0,
        }
    }
}

impl SimConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidConfig` naming the offending field when the
    /// population is empty, a distribution parameter is non-positive, or the
    /// drop-factor bounds are inverted or outside `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.n_businesses == 0 {
            return Err(DataError::InvalidConfig(
                "n_businesses must be at least 1".to_string(),
            ));
        }
        if self.revenue_mean <= 0.0 {
            return Err(DataError::InvalidConfig(
                "revenue_mean must be positive".to_string(),
            ));
        }
        if self.revenue_std <= 0.0 {
            return Err(DataError::InvalidConfig(
                "revenue_std must be positive".to_string(),
            ));
        }
        if self.revenue_floor <= 0.0 {
            return Err(DataError::InvalidConfig(
                "revenue_floor must be positive".to_string(),
            ));
        }
        if !(self.drop_min > 0.0 && self.drop_min <= self.drop_max && self.drop_max <= 1.0) {
            return Err(DataError::InvalidConfig(format!(
                "drop factors must satisfy 0 < min <= max <= 1, got [{}, {}]",
                self.drop_min, self.drop_max
            )));
        }
        Ok(())
    }
}

/// Seeded generator for the simulated business universe.
#[derive(Debug)]
pub struct Simulator {
    config: SimConfig,
}

impl Simulator {
    /// Create a simulator from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Access the configuration.
    pub const fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Generate the business population.
    ///
    /// Sectors are assigned uniformly at random; revenues follow the
    /// configured clipped normal; drop factors are uniform in
    /// `[drop_min, drop_max]`.
    pub fn generate(&self) -> Result<Vec<BusinessRecord>> {
        let cfg = &self.config;
        let mut rng = StdRng::seed_from_u64(cfg.seed);

        let revenue_dist = Normal::new(cfg.revenue_mean, cfg.revenue_std)
            .map_err(|e| DataError::Distribution(e.to_string()))?;
        let drop_dist = Uniform::new_inclusive(cfg.drop_min, cfg.drop_max);

        let sectors = Sector::all();
        let mut records = Vec::with_capacity(cfg.n_businesses);
        for i in 0..cfg.n_businesses {
            let sector = sectors[rng.gen_range(0..sectors.len())];
            let pre = revenue_dist.sample(&mut rng).max(cfg.revenue_floor);
            let drop_factor = drop_dist.sample(&mut rng);
            let post = pre * drop_factor;
            records.push(BusinessRecord::new(i as u32 + 1, sector, pre, post));
        }

        Ok(records)
    }

    /// Generate the population as the canonical dataset frame.
    pub fn generate_frame(&self) -> Result<DataFrame> {
        let records = self.generate()?;
        records_to_frame(&records)
    }
}
