use geo::{Distance, Euclidean, Intersects, LinesIter, MultiLineString, MultiPolygon};

/// Minimum planar distance from a footprint to the road centerlines, zero
/// when the footprint overlaps a centerline.
///
/// For non-crossing segment sets the minimum is always attained between a
/// footprint edge and a road edge, so the segment-pair sweep IS the exact
/// nearest-point search. Footprints are small rings and centerline vertex
/// counts are bounded by the corridor, so the sweep stays cheap per
/// building.
pub(crate) fn distance_to_centerlines(
    footprint: &MultiPolygon<f64>,
    centerlines: &MultiLineString<f64>,
) -> f64 {
    if footprint.intersects(centerlines) {
        return 0.0;
    }

    let mut min = f64::INFINITY;
    for edge in footprint.lines_iter() {
        for road_edge in centerlines.lines_iter() {
            let d = Euclidean.distance(&edge, &road_edge);
            if d < min {
                min = d;
            }
        }
    }
    min
}
