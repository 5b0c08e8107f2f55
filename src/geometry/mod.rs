mod buffer;
mod nearest;
mod proj;

pub(crate) use buffer::build_reserve;
pub(crate) use nearest::distance_to_centerlines;
pub(crate) use proj::MetricProjection;

use geo::{BoundingRect, Intersects, MultiPolygon, Rect};
use rstar::{RTree, RTreeObject, AABB};

/// A footprint bounding box in the R-tree, tied to its footprint by index.
#[derive(Debug, Clone)]
struct FootprintBox {
    idx: usize, // Index into the projected footprint slice
    bbox: Rect<f64>,
}

impl RTreeObject for FootprintBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}

/// Bounding-box index over projected building footprints.
///
/// Building layers run to the thousands and the reserve polygon can be
/// complex, so selection queries the R-tree first and runs the exact
/// intersection predicate only on envelope candidates.
#[derive(Debug)]
pub(crate) struct FootprintIndex {
    rtree: RTree<FootprintBox>,
    skipped: usize,
}

impl FootprintIndex {
    /// Bulk-load the index. A footprint without a computable bounding box
    /// carries no geometry; it is skipped and counted, never fatal.
    pub(crate) fn new(footprints: &[MultiPolygon<f64>]) -> Self {
        let mut skipped = 0;
        let boxes: Vec<FootprintBox> = footprints
            .iter()
            .enumerate()
            .filter_map(|(idx, geom)| match geom.bounding_rect() {
                Some(bbox) => Some(FootprintBox { idx, bbox }),
                None => {
                    log::warn!("skipping footprint {idx}: no usable geometry");
                    skipped += 1;
                    None
                }
            })
            .collect();

        Self { rtree: RTree::bulk_load(boxes), skipped }
    }

    /// Footprints dropped at index-build time.
    #[inline]
    pub(crate) fn skipped(&self) -> usize {
        self.skipped
    }

    /// Indices of footprints whose geometry intersects the reserve zone,
    /// in input order. Boundary touches count as intersecting.
    pub(crate) fn select_intersecting(
        &self,
        footprints: &[MultiPolygon<f64>],
        reserve: &MultiPolygon<f64>,
    ) -> Vec<usize> {
        let Some(rect) = reserve.bounding_rect() else {
            return Vec::new();
        };
        let search = AABB::from_corners(rect.min().into(), rect.max().into());

        let mut hits: Vec<usize> = self
            .rtree
            .locate_in_envelope_intersecting(&search)
            .filter(|cand| footprints[cand.idx].intersects(reserve))
            .map(|cand| cand.idx)
            .collect();
        hits.sort_unstable();
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, Polygon};

    fn rect(x0: f64, x1: f64, y0: f64, y1: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![Polygon::new(
            LineString::from(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)]),
            vec![],
        )])
    }

    #[test]
    fn selects_only_intersecting_footprints() {
        let reserve = rect(-50.0, 50.0, 0.0, 1000.0);
        let footprints = vec![
            rect(20.0, 30.0, 0.0, 20.0),    // inside
            rect(60.0, 70.0, 0.0, 20.0),    // outside
            rect(40.0, 60.0, 0.0, 20.0),    // straddles the boundary
            rect(-200.0, -100.0, 0.0, 20.0), // outside, other side
        ];

        let index = FootprintIndex::new(&footprints);
        assert_eq!(index.select_intersecting(&footprints, &reserve), vec![0, 2]);
        assert_eq!(index.skipped(), 0);
    }

    #[test]
    fn empty_geometry_is_skipped_and_counted() {
        let footprints = vec![MultiPolygon::new(vec![]), rect(0.0, 10.0, 0.0, 10.0)];
        let index = FootprintIndex::new(&footprints);
        assert_eq!(index.skipped(), 1);

        let reserve = rect(-50.0, 50.0, -50.0, 50.0);
        assert_eq!(index.select_intersecting(&footprints, &reserve), vec![1]);
    }

    #[test]
    fn empty_reserve_selects_nothing() {
        let footprints = vec![rect(0.0, 10.0, 0.0, 10.0)];
        let index = FootprintIndex::new(&footprints);
        assert!(index
            .select_intersecting(&footprints, &MultiPolygon::new(vec![]))
            .is_empty());
    }

    #[test]
    fn bbox_overlap_alone_is_not_selection() {
        // The candidate envelope intersects the reserve bbox but the exact
        // test must still reject it: an L-shaped reserve leaves the corner
        // empty.
        let reserve = MultiPolygon(vec![Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (100.0, 0.0),
                (100.0, 10.0),
                (10.0, 10.0),
                (10.0, 100.0),
                (0.0, 100.0),
                (0.0, 0.0),
            ]),
            vec![],
        )]);
        let footprints = vec![rect(50.0, 60.0, 50.0, 60.0)];
        let index = FootprintIndex::new(&footprints);
        assert!(index.select_intersecting(&footprints, &reserve).is_empty());
    }
}
