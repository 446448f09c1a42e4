//! Business record type and dataset column names.

use crate::sector::Sector;
use serde::{Deserialize, Serialize};

/// Column name for the business identifier.
pub const COL_BUSINESS_ID: &str = "business_id";
/// Column name for the sector.
pub const COL_SECTOR: &str = "sector";
/// Column name for pre-COVID revenue (thousands of dollars).
pub const COL_PRE_REVENUE: &str = "pre_covid_revenue";
/// Column name for post-COVID revenue (thousands of dollars).
pub const COL_POST_REVENUE: &str = "post_covid_revenue";
/// Column name for the revenue decline percentage.
pub const COL_DECLINE_PCT: &str = "decline_pct";

/// All dataset columns in canonical order.
pub const DATASET_COLUMNS: [&str; 5] = [
    COL_BUSINESS_ID,
    COL_SECTOR,
    COL_PRE_REVENUE,
    COL_POST_REVENUE,
    COL_DECLINE_PCT,
];

/// A single business in the simulated universe.
///
/// Revenues are in thousands of dollars. The decline percentage is derived
/// from the two revenue figures and is always in `[0, 100]` while the
/// post-COVID revenue does not exceed the pre-COVID revenue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessRecord {
    /// Business identifier (1-based).
    pub business_id: u32,

    /// Economic sector the business operates in.
    pub sector: Sector,

    /// Annual revenue before the pandemic.
    pub pre_covid_revenue: f64,

    /// Annual revenue after the pandemic shock.
    pub post_covid_revenue: f64,

    /// Revenue decline in percent: `(pre - post) / pre * 100`.
    pub decline_pct: f64,
}

impl BusinessRecord {
    /// Create a new record, deriving the decline percentage.
    pub fn new(business_id: u32, sector: Sector, pre: f64, post: f64) -> Self {
        let decline_pct = if pre.abs() > f64::EPSILON {
            (pre - post) / pre * 100.0
        } else {
            0.0
        };
        Self {
            business_id,
            sector,
            pre_covid_revenue: pre,
            post_covid_revenue: post,
            decline_pct,
        }
    }

    /// Absolute revenue lost to the shock (thousands of dollars).
    pub fn revenue_loss(&self) -> f64 {
        self.pre_covid_revenue - self.post_covid_revenue
    }
}
