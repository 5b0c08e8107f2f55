#![doc = "Road-reserve encroachment analysis public API"]
mod analysis;
mod cache;
mod error;
mod geometry;
mod io;
mod source;
mod types;

#[doc(inline)]
pub use types::{BuildingFootprint, EncroachmentRecord, RoadNetwork, RoadSegment, Severity};

#[doc(inline)]
pub use analysis::{analyze, AnalysisSummary, EncroachmentAnalysis, DEFAULT_BUFFER_DISTANCE_M};

#[doc(inline)]
pub use error::EncroachmentError;

#[doc(inline)]
pub use cache::{AnalysisCache, AnalysisKey};

#[doc(inline)]
pub use source::GeometrySource;

#[doc(inline)]
pub use io::{
    records_to_dataframe, records_to_geojson_bytes, reserve_to_geojson_bytes, write_records_csv,
    write_records_csv_string,
};
