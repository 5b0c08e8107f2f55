use geo::MultiPolygon;

use super::severity::Severity;

/// One encroaching building with its derived metrics, in geographic
/// coordinates. Computed once per pipeline run; immutable thereafter.
///
/// Invariants: the footprint genuinely intersects the reserve zone,
/// `encroached_area_sqm <= total_area_sqm`, and the ratio lies in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct EncroachmentRecord {
    /// Original footprint, reprojected back to lon/lat.
    pub geometry: MultiPolygon<f64>,
    /// Minimum planar distance to the road centerlines, metres.
    pub distance_to_road: f64,
    /// Buffer distance minus distance to road, clamped at zero, metres.
    pub encroachment_depth: f64,
    /// Planar footprint area, square metres.
    pub total_area_sqm: f64,
    /// Planar area of footprint ∩ reserve zone, square metres.
    pub encroached_area_sqm: f64,
    /// encroached / total; 0 for zero-area footprints.
    pub encroachment_ratio: f64,
    pub severity: Severity,
    /// Normalized building tag ("General" when absent or generic).
    pub building_type: String,
    /// Footprint centroid, geographic coordinates.
    pub latitude: f64,
    pub longitude: f64,
}
