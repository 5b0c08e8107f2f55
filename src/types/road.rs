use geo::{BoundingRect, LineString, MultiLineString, Rect};

/// One road-network edge in geographic (lon/lat) coordinates.
#[derive(Debug, Clone)]
pub struct RoadSegment {
    pub line: LineString<f64>,
    pub name: Option<String>,  // Common name ("Outer Ring Road")
    pub class: Option<String>, // Network classification ("trunk", "primary")
}

impl RoadSegment {
    pub fn new(line: LineString<f64>) -> Self {
        Self { line, name: None, class: None }
    }

    pub fn named(line: LineString<f64>, name: impl Into<String>) -> Self {
        Self { line, name: Some(name.into()), class: None }
    }
}

/// The ordered set of centerline edges matching one road corridor.
///
/// Must hold at least one segment for a reserve zone to exist; the pipeline
/// rejects an empty network up front rather than letting downstream stages
/// operate on an empty buffer.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    pub segments: Vec<RoadSegment>,
}

impl RoadNetwork {
    pub fn new(segments: Vec<RoadSegment>) -> Self {
        Self { segments }
    }

    #[inline] pub fn len(&self) -> usize { self.segments.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.segments.is_empty() }

    /// All centerlines as a single MultiLineString.
    pub fn centerlines(&self) -> MultiLineString<f64> {
        MultiLineString(self.segments.iter().map(|s| s.line.clone()).collect())
    }

    /// Bounding box of the whole network; `None` when no coordinates exist.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.centerlines().bounding_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_network_has_no_bounds() {
        assert!(RoadNetwork::default().bounds().is_none());
    }

    #[test]
    fn bounds_cover_all_segments() {
        let network = RoadNetwork::new(vec![
            RoadSegment::new(LineString::from(vec![(0.0, 0.0), (1.0, 0.0)])),
            RoadSegment::new(LineString::from(vec![(3.0, 2.0), (4.0, 5.0)])),
        ]);
        let rect = network.bounds().unwrap();
        assert_eq!(rect.min().x, 0.0);
        assert_eq!(rect.max().y, 5.0);
    }

    #[test]
    fn centerlines_preserve_segment_order() {
        let network = RoadNetwork::new(vec![
            RoadSegment::named(LineString::from(vec![(0.0, 0.0), (1.0, 0.0)]), "A"),
            RoadSegment::named(LineString::from(vec![(1.0, 0.0), (2.0, 0.0)]), "B"),
        ]);
        assert_eq!(network.centerlines().0.len(), 2);
        assert_eq!(network.segments[1].name.as_deref(), Some("B"));
    }
}
