//! CSV/tabular export of encroachment records.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{
    frame::DataFrame,
    io::SerWriter,
    prelude::{CsvWriter, NamedFrom},
    series::Series,
};

use crate::types::EncroachmentRecord;

/// Flatten records into the stable export table.
///
/// Column names and units (metres, square metres, ratio in [0, 1]) are a
/// compatibility contract with downstream CSV/JSON consumers; do not rename.
pub fn records_to_dataframe(records: &[EncroachmentRecord]) -> Result<DataFrame> {
    let severity: Vec<&str> = records.iter().map(|r| r.severity.to_str()).collect();
    let building_type: Vec<&str> = records.iter().map(|r| r.building_type.as_str()).collect();
    let depth: Vec<f64> = records.iter().map(|r| r.encroachment_depth).collect();
    let distance: Vec<f64> = records.iter().map(|r| r.distance_to_road).collect();
    let total_area: Vec<f64> = records.iter().map(|r| r.total_area_sqm).collect();
    let encroached_area: Vec<f64> = records.iter().map(|r| r.encroached_area_sqm).collect();
    let ratio: Vec<f64> = records.iter().map(|r| r.encroachment_ratio).collect();
    let latitude: Vec<f64> = records.iter().map(|r| r.latitude).collect();
    let longitude: Vec<f64> = records.iter().map(|r| r.longitude).collect();

    DataFrame::new(vec![
        Series::new("severity".into(), severity).into(),
        Series::new("building_type".into(), building_type).into(),
        Series::new("encroachment_depth".into(), depth).into(),
        Series::new("distance_to_road".into(), distance).into(),
        Series::new("total_area_sqm".into(), total_area).into(),
        Series::new("encroached_area_sqm".into(), encroached_area).into(),
        Series::new("encroachment_ratio".into(), ratio).into(),
        Series::new("latitude".into(), latitude).into(),
        Series::new("longitude".into(), longitude).into(),
    ])
    .context("[io::csv] Failed to assemble record DataFrame")
}

/// Write records to a CSV file.
pub fn write_records_csv(records: &[EncroachmentRecord], path: &Path) -> Result<()> {
    let mut df = records_to_dataframe(records)?;
    let file = File::create(path)
        .with_context(|| format!("[io::csv] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(file)
        .finish(&mut df)
        .with_context(|| format!("[io::csv] Failed to write CSV to {:?}", path))
}

/// Write records to a CSV string (for service/browser use).
pub fn write_records_csv_string(records: &[EncroachmentRecord]) -> Result<String> {
    let mut df = records_to_dataframe(records)?;
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .finish(&mut df)
        .context("[io::csv] Failed to write CSV to string")?;
    String::from_utf8(buffer).context("[io::csv] CSV output is not valid UTF-8")
}
