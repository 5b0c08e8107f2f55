use crate::error::EncroachmentError;
use crate::types::{BuildingFootprint, RoadNetwork};

/// Upstream geometry provider the analysis is fed from.
///
/// Acquisition is the caller's concern: implementations wrap an OSM
/// extract, a tile service, a cached file, or a test fixture. The core
/// never retries a failed provider: a failure surfaces as
/// [`EncroachmentError::Acquisition`] and aborts the invocation, so
/// transient-failure handling (and cancellation) lives at this boundary,
/// not inside the pipeline.
pub trait GeometrySource {
    /// Centerline edges matching `road_name` within `place`.
    fn road_network(&self, place: &str, road_name: &str)
        -> Result<RoadNetwork, EncroachmentError>;

    /// Building footprint layer for `place`.
    fn building_footprints(&self, place: &str)
        -> Result<Vec<BuildingFootprint>, EncroachmentError>;
}
