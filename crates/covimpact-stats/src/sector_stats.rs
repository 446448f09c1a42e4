//! Per-sector aggregation over the dataset frame.

use crate::error::{Result, StatsError};
use covimpact_data::record::{COL_DECLINE_PCT, COL_SECTOR};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Aggregated decline statistics for one sector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectorStats {
    /// Sector name.
    pub sector: String,

    /// Number of businesses in the sector.
    pub count: u32,

    /// Mean revenue decline (%).
    pub mean_decline: f64,

    /// Sample standard deviation of the decline (0 for a single business).
    pub std_decline: f64,

    /// Smallest decline (%).
    pub min_decline: f64,

    /// Largest decline (%).
    pub max_decline: f64,
}

/// Extract a dense `f64` column from the frame.
///
/// # Errors
///
/// Returns an error when the column is missing or contains nulls.
pub fn extract_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df
        .column(name)
        .map_err(|_| StatsError::MissingColumn(name.to_string()))?;
    let ca = column.f64()?;
    if ca.null_count() > 0 {
        return Err(StatsError::MissingColumn(format!("{name} (has nulls)")));
    }
    Ok(ca.into_no_null_iter().collect())
}

/// Group the dataset by sector and aggregate the decline column.
///
/// Rows are sorted by mean decline, hardest hit first.
pub fn sector_breakdown(df: &DataFrame) -> Result<Vec<SectorStats>> {
    if df.column(COL_SECTOR).is_err() {
        return Err(StatsError::MissingColumn(COL_SECTOR.to_string()));
    }
    if df.column(COL_DECLINE_PCT).is_err() {
        return Err(StatsError::MissingColumn(COL_DECLINE_PCT.to_string()));
    }

    let grouped = df
        .clone()
        .lazy()
        .group_by([col(COL_SECTOR)])
        .agg([
            col(COL_DECLINE_PCT).count().alias("count"),
            col(COL_DECLINE_PCT).mean().alias("mean_decline"),
            // A single-business sector has no sample deviation.
            col(COL_DECLINE_PCT)
                .std(1)
                .fill_null(lit(0.0))
                .alias("std_decline"),
            col(COL_DECLINE_PCT).min().alias("min_decline"),
            col(COL_DECLINE_PCT).max().alias("max_decline"),
        ])
        .sort(
            ["mean_decline"],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;

    let sectors = grouped.column(COL_SECTOR)?.str()?;
    let counts = grouped.column("count")?.cast(&DataType::UInt32)?;
    let counts = counts.u32()?;
    let means = grouped.column("mean_decline")?.f64()?;
    let stds = grouped.column("std_decline")?.f64()?;
    let mins = grouped.column("min_decline")?.f64()?;
    let maxs = grouped.column("max_decline")?.f64()?;

    let mut rows = Vec::with_capacity(grouped.height());
    for i in 0..grouped.height() {
        let get = |ca: &Float64Chunked, field: &str| {
            ca.get(i)
                .ok_or_else(|| StatsError::MissingColumn(field.to_string()))
        };
        rows.push(SectorStats {
            sector: sectors
                .get(i)
                .ok_or_else(|| StatsError::MissingColumn(COL_SECTOR.to_string()))?
                .to_string(),
            count: counts
                .get(i)
                .ok_or_else(|| StatsError::MissingColumn("count".to_string()))?,
            mean_decline: get(means, "mean_decline")?,
            std_decline: get(stds, "std_decline")?,
            min_decline: get(mins, "min_decline")?,
            max_decline: get(maxs, "max_decline")?,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use covimpact_data::record::BusinessRecord;
    use covimpact_data::{Sector, records_to_frame};

    fn sample_frame() -> DataFrame {
        let records = vec![
            BusinessRecord::new(1, Sector::Retail, 500.0, 250.0), // 50%
            BusinessRecord::new(2, Sector::Retail, 400.0, 300.0), // 25%
            BusinessRecord::new(3, Sector::Hospitality, 400.0, 120.0), // 70%
            BusinessRecord::new(4, Sector::Healthcare, 600.0, 540.0), // 10%
        ];
        records_to_frame(&records).unwrap()
    }

    #[test]
    fn test_breakdown_rows_and_order() {
        let rows = sector_breakdown(&sample_frame()).unwrap();
        assert_eq!(rows.len(), 3);
        // Sorted hardest hit first.
        assert_eq!(rows[0].sector, "Hospitality");
        assert_eq!(rows[1].sector, "Retail");
        assert_eq!(rows[2].sector, "Healthcare");
        assert!(
            rows.windows(2)
                .all(|w| w[0].mean_decline >= w[1].mean_decline)
        );
    }

    #[test]
    fn test_breakdown_values() {
        let rows = sector_breakdown(&sample_frame()).unwrap();
        let retail = rows.iter().find(|r| r.sector == "Retail").unwrap();
        assert_eq!(retail.count, 2);
        assert_abs_diff_eq!(retail.mean_decline, 37.5, epsilon = 1e-10);
        assert_abs_diff_eq!(retail.min_decline, 25.0, epsilon = 1e-10);
        assert_abs_diff_eq!(retail.max_decline, 50.0, epsilon = 1e-10);
    }

    #[test]
    fn test_single_business_sector_std_is_zero() {
        let rows = sector_breakdown(&sample_frame()).unwrap();
        let hosp = rows.iter().find(|r| r.sector == "Hospitality").unwrap();
        assert_eq!(hosp.count, 1);
        assert_eq!(hosp.std_decline, 0.0);
    }

    #[test]
    fn test_extract_column() {
        let values = extract_column(&sample_frame(), COL_DECLINE_PCT).unwrap();
        assert_eq!(values.len(), 4);
        assert_abs_diff_eq!(values[2], 70.0, epsilon = 1e-10);
    }

    #[test]
    fn test_missing_column_rejected() {
        let df = DataFrame::new(vec![Series::new("x".into(), vec![1.0]).into()]).unwrap();
        assert!(matches!(
            sector_breakdown(&df),
            Err(StatsError::MissingColumn(_))
        ));
        assert!(extract_column(&df, "nope").is_err());
    }
}
