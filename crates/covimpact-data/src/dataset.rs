//! Conversions between business records and the polars dataset frame.

use crate::error::{DataError, Result};
use crate::record::{
    BusinessRecord, COL_BUSINESS_ID, COL_DECLINE_PCT, COL_POST_REVENUE, COL_PRE_REVENUE,
    COL_SECTOR, DATASET_COLUMNS,
};
use crate::sector::Sector;
use polars::prelude::*;
use std::path::Path;

/// Materialize records as the canonical dataset frame.
///
/// The decline column is derived lazily from the revenue columns rather than
/// copied from the records, so a frame built from externally loaded records
/// always carries a consistent `decline_pct`.
pub fn records_to_frame(records: &[BusinessRecord]) -> Result<DataFrame> {
    let ids: Vec<u32> = records.iter().map(|r| r.business_id).collect();
    let sectors: Vec<&str> = records.iter().map(|r| r.sector.name()).collect();
    let pre: Vec<f64> = records.iter().map(|r| r.pre_covid_revenue).collect();
    let post: Vec<f64> = records.iter().map(|r| r.post_covid_revenue).collect();

    let df = DataFrame::new(vec![
        Series::new(COL_BUSINESS_ID.into(), ids).into(),
        Series::new(COL_SECTOR.into(), sectors).into(),
        Series::new(COL_PRE_REVENUE.into(), pre).into(),
        Series::new(COL_POST_REVENUE.into(), post).into(),
    ])?;

    let df = df
        .lazy()
        .with_column(
            ((col(COL_PRE_REVENUE) - col(COL_POST_REVENUE)) / col(COL_PRE_REVENUE) * lit(100.0))
                .alias(COL_DECLINE_PCT),
        )
        .collect()?;

    Ok(df)
}

/// Check that a frame carries every canonical dataset column.
pub fn validate_frame(df: &DataFrame) -> Result<()> {
    for name in DATASET_COLUMNS {
        if df.column(name).is_err() {
            return Err(DataError::MissingColumn(name.to_string()));
        }
    }
    Ok(())
}

/// Extract typed records from a dataset frame.
pub fn records_from_frame(df: &DataFrame) -> Result<Vec<BusinessRecord>> {
    validate_frame(df)?;

    let ids = df.column(COL_BUSINESS_ID)?.cast(&DataType::UInt32)?;
    let ids = ids.u32()?;
    let sectors = df.column(COL_SECTOR)?.str()?;
    let pre = df.column(COL_PRE_REVENUE)?.f64()?;
    let post = df.column(COL_POST_REVENUE)?.f64()?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let id = ids
            .get(i)
            .ok_or_else(|| DataError::MissingColumn(COL_BUSINESS_ID.to_string()))?;
        let sector_name = sectors
            .get(i)
            .ok_or_else(|| DataError::MissingColumn(COL_SECTOR.to_string()))?;
        let sector = Sector::from_name(sector_name)
            .ok_or_else(|| DataError::UnknownSector(sector_name.to_string()))?;
        let pre_rev = pre
            .get(i)
            .ok_or_else(|| DataError::MissingColumn(COL_PRE_REVENUE.to_string()))?;
        let post_rev = post
            .get(i)
            .ok_or_else(|| DataError::MissingColumn(COL_POST_REVENUE.to_string()))?;
        records.push(BusinessRecord::new(id, sector, pre_rev, post_rev));
    }

    Ok(records)
}

/// Load business records from a dataset CSV written by the exporter.
pub fn read_records_csv(path: &Path) -> Result<Vec<BusinessRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize::<BusinessRecord>() {
        let raw = row?;
        // Re-derive the decline column instead of trusting the file.
        records.push(BusinessRecord::new(
            raw.business_id,
            raw.sector,
            raw.pre_covid_revenue,
            raw.post_covid_revenue,
        ));
    }
    Ok(records)
}
