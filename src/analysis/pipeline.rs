use geo::{Centroid, MultiLineString, MultiPolygon};

use super::{metrics, summary::AnalysisSummary};
use crate::error::EncroachmentError;
use crate::geometry::{build_reserve, FootprintIndex, MetricProjection};
use crate::types::{BuildingFootprint, EncroachmentRecord, RoadNetwork, Severity};

/// Statutory right-of-way half-width applied when the caller does not pick
/// one. Callers typically range over 20–100 m.
pub const DEFAULT_BUFFER_DISTANCE_M: f64 = 50.0;

/// Output of one pipeline invocation, geographic coordinates throughout.
#[derive(Debug, Clone)]
pub struct EncroachmentAnalysis {
    /// One record per building intersecting the reserve, in input order.
    pub records: Vec<EncroachmentRecord>,
    /// The unified right-of-way polygon.
    pub reserve_zone: MultiPolygon<f64>,
    /// Footprints dropped for carrying no usable geometry.
    pub skipped_footprints: usize,
}

impl EncroachmentAnalysis {
    /// "No encroachments found" is a valid outcome, not an error.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary::from_records(&self.records)
    }
}

/// Run the full encroachment pipeline over one road corridor.
///
/// Projects roads and footprints into a UTM zone picked from the corridor,
/// buffers the centerlines into the reserve zone, selects intersecting
/// footprints through the bounding-box index, computes per-building
/// metrics, classifies severity, and reprojects everything back to lon/lat.
///
/// Repeat calls on identical inputs produce identical results; the
/// per-building arithmetic is independent and sequential, with no running
/// accumulation to reorder.
pub fn analyze(
    roads: &RoadNetwork,
    buildings: &[BuildingFootprint],
    buffer_distance_m: f64,
) -> Result<EncroachmentAnalysis, EncroachmentError> {
    if !buffer_distance_m.is_finite() || buffer_distance_m <= 0.0 {
        return Err(EncroachmentError::InvalidBufferDistance(buffer_distance_m));
    }
    if roads.is_empty() {
        return Err(EncroachmentError::NoRoad);
    }

    // One UTM zone for the whole invocation, picked from the corridor.
    let bounds = roads.bounds().ok_or_else(|| {
        EncroachmentError::Projection("road network has no coordinates, cannot choose a UTM zone".into())
    })?;
    let projection = MetricProjection::for_center(bounds.center())?;

    let centerlines_metric: MultiLineString<f64> = projection.to_metric(&roads.centerlines())?;
    let reserve_metric = build_reserve(&centerlines_metric.0, buffer_distance_m);

    log::debug!(
        "reserve zone: {} part(s) from {} road segment(s), buffer {buffer_distance_m} m",
        reserve_metric.0.len(),
        roads.len(),
    );

    let mut footprints_metric: Vec<MultiPolygon<f64>> = Vec::with_capacity(buildings.len());
    for building in buildings {
        footprints_metric.push(projection.to_metric(&building.geometry)?);
    }

    let index = FootprintIndex::new(&footprints_metric);
    let selected = index.select_intersecting(&footprints_metric, &reserve_metric);
    let mut skipped = index.skipped();

    log::debug!(
        "{} of {} footprints intersect the reserve ({skipped} skipped)",
        selected.len(),
        buildings.len(),
    );

    let mut records = Vec::with_capacity(selected.len());
    for idx in selected {
        let footprint = &footprints_metric[idx];
        let m = metrics::compute(footprint, &centerlines_metric, &reserve_metric, buffer_distance_m);

        let geometry = projection.to_geographic(footprint)?;
        let Some(centroid) = geometry.centroid() else {
            // Selection guarantees real geometry, so a missing centroid
            // means the footprint degenerated; skip it like any other
            // malformed record.
            log::warn!("skipping footprint {idx}: no centroid after reprojection");
            skipped += 1;
            continue;
        };

        records.push(EncroachmentRecord {
            geometry,
            distance_to_road: m.distance_to_road,
            encroachment_depth: m.encroachment_depth,
            total_area_sqm: m.total_area_sqm,
            encroached_area_sqm: m.encroached_area_sqm,
            encroachment_ratio: m.encroachment_ratio,
            severity: Severity::classify(m.encroachment_depth),
            building_type: buildings[idx].normalized_kind(),
            latitude: centroid.y(),
            longitude: centroid.x(),
        });
    }

    let reserve_zone = projection.to_geographic(&reserve_metric)?;

    Ok(EncroachmentAnalysis { records, reserve_zone, skipped_footprints: skipped })
}
