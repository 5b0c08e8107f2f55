use geo::{Area, BooleanOps, MultiLineString, MultiPolygon};

use crate::geometry::distance_to_centerlines;

/// Planar metrics for one candidate footprint, all in metric units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BuildingMetrics {
    pub distance_to_road: f64,
    pub encroachment_depth: f64,
    pub total_area_sqm: f64,
    pub encroached_area_sqm: f64,
    pub encroachment_ratio: f64,
}

/// Compute the per-building metric set against the projected centerlines
/// and reserve zone. Pure and per-building independent.
pub(crate) fn compute(
    footprint: &MultiPolygon<f64>,
    centerlines: &MultiLineString<f64>,
    reserve: &MultiPolygon<f64>,
    buffer_distance_m: f64,
) -> BuildingMetrics {
    let distance_to_road = distance_to_centerlines(footprint, centerlines);

    // A footprint that only touches the buffer boundary sits at exactly the
    // buffer distance; clamp instead of reporting a negative depth.
    let encroachment_depth = (buffer_distance_m - distance_to_road).max(0.0);

    let total_area_sqm = footprint.unsigned_area();
    let encroached_area_sqm = footprint
        .intersection(reserve)
        .unsigned_area()
        .min(total_area_sqm);

    let encroachment_ratio = if total_area_sqm > 0.0 {
        (encroached_area_sqm / total_area_sqm).clamp(0.0, 1.0)
    } else {
        0.0
    };

    BuildingMetrics {
        distance_to_road,
        encroachment_depth,
        total_area_sqm,
        encroached_area_sqm,
        encroachment_ratio,
    }
}
