//! Serialization of finished analyses for presentation layers.

mod csv;
mod geojson;

pub use csv::{records_to_dataframe, write_records_csv, write_records_csv_string};
pub use geojson::{records_to_geojson_bytes, reserve_to_geojson_bytes};
