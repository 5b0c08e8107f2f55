use geo::{unary_union, Coord, LineString, MultiPolygon, Polygon};

/// Vertices per semicircular end cap. 16 keeps a capsule's area within
/// ~0.3% of the true round-capped footprint, well inside the metric
/// tolerances downstream.
const CAP_SEGMENTS: usize = 16;

/// Union of per-segment buffers around every centerline: the road's
/// right-of-way footprint. Holes between diverging segments survive the
/// union; this is deliberately not a convex hull.
///
/// Empty input produces an empty MultiPolygon; the pipeline rejects a
/// no-road network before this runs, so emptiness here only means every
/// segment degenerated.
pub(crate) fn build_reserve(
    centerlines: &[LineString<f64>],
    distance_m: f64,
) -> MultiPolygon<f64> {
    debug_assert!(distance_m > 0.0);

    let mut capsules: Vec<Polygon<f64>> = Vec::new();
    for line in centerlines {
        let before = capsules.len();
        for segment in line.lines() {
            if let Some(capsule) = capsule(segment.start, segment.end, distance_m) {
                capsules.push(capsule);
            }
        }
        // A linestring whose every segment is zero-length still marks a
        // location; keep a disc there instead of dropping it.
        if capsules.len() == before {
            if let Some(&coord) = line.0.first() {
                capsules.push(disc(coord, distance_m));
            }
        }
    }

    unary_union(&capsules)
}

/// Rectangle-with-round-caps footprint around one segment, or `None` for a
/// zero-length segment.
fn capsule(start: Coord<f64>, end: Coord<f64>, radius: f64) -> Option<Polygon<f64>> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx == 0.0 && dy == 0.0 {
        return None;
    }

    let heading = dy.atan2(dx);
    let mut ring: Vec<Coord<f64>> = Vec::with_capacity(2 * CAP_SEGMENTS + 2);

    // Cap around `end`: sweep from heading - 90° through heading + 90°.
    for step in 0..=CAP_SEGMENTS {
        let angle = heading - std::f64::consts::FRAC_PI_2
            + std::f64::consts::PI * step as f64 / CAP_SEGMENTS as f64;
        ring.push(Coord {
            x: end.x + radius * angle.cos(),
            y: end.y + radius * angle.sin(),
        });
    }
    // Cap around `start`: the opposite sweep.
    for step in 0..=CAP_SEGMENTS {
        let angle = heading + std::f64::consts::FRAC_PI_2
            + std::f64::consts::PI * step as f64 / CAP_SEGMENTS as f64;
        ring.push(Coord {
            x: start.x + radius * angle.cos(),
            y: start.y + radius * angle.sin(),
        });
    }

    Some(Polygon::new(LineString(ring), vec![]))
}

/// Discretized disc for point-like road geometry.
fn disc(center: Coord<f64>, radius: f64) -> Polygon<f64> {
    let steps = 2 * CAP_SEGMENTS;
    let ring = (0..=steps)
        .map(|step| {
            let angle = std::f64::consts::TAU * step as f64 / steps as f64;
            Coord {
                x: center.x + radius * angle.cos(),
                y: center.y + radius * angle.sin(),
            }
        })
        .collect();
    Polygon::new(LineString(ring), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    #[test]
    fn straight_segment_buffer_has_capsule_area() {
        let line = LineString::from(vec![(0.0, 0.0), (0.0, 1000.0)]);
        let reserve = build_reserve(&[line], 50.0);

        // 2 * r * len for the body plus a discretized pi * r^2 for the caps.
        let expected = 2.0 * 50.0 * 1000.0 + std::f64::consts::PI * 50.0 * 50.0;
        let area = reserve.unsigned_area();
        assert!(area > 2.0 * 50.0 * 1000.0);
        assert!((area - expected).abs() / expected < 0.005, "got {area}");
    }

    #[test]
    fn disjoint_segments_make_a_multipart_zone() {
        let reserve = build_reserve(
            &[
                LineString::from(vec![(0.0, 0.0), (0.0, 100.0)]),
                LineString::from(vec![(10_000.0, 0.0), (10_000.0, 100.0)]),
            ],
            50.0,
        );
        assert_eq!(reserve.0.len(), 2);
    }

    #[test]
    fn crossing_segments_merge_into_one_part() {
        let reserve = build_reserve(
            &[
                LineString::from(vec![(-100.0, 0.0), (100.0, 0.0)]),
                LineString::from(vec![(0.0, -100.0), (0.0, 100.0)]),
            ],
            50.0,
        );
        assert_eq!(reserve.0.len(), 1);
    }

    #[test]
    fn empty_input_yields_an_empty_zone() {
        assert!(build_reserve(&[], 50.0).0.is_empty());
    }

    #[test]
    fn point_like_line_keeps_a_disc() {
        let line = LineString::from(vec![(5.0, 5.0), (5.0, 5.0)]);
        let reserve = build_reserve(&[line], 10.0);
        assert_eq!(reserve.0.len(), 1);

        let expected = std::f64::consts::PI * 100.0;
        let area = reserve.unsigned_area();
        assert!((area - expected).abs() / expected < 0.01, "got {area}");
    }
}
