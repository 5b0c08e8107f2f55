use geo::MultiPolygon;

/// OSM-style tag value that carries no type information.
const GENERIC_TAG: &str = "yes";

/// A building footprint in geographic (lon/lat) coordinates.
///
/// Immutable input; the pipeline reads it and never mutates it.
#[derive(Debug, Clone)]
pub struct BuildingFootprint {
    pub geometry: MultiPolygon<f64>,
    pub kind: Option<String>, // Free-text building tag, if any
}

impl BuildingFootprint {
    pub fn new(geometry: MultiPolygon<f64>) -> Self {
        Self { geometry, kind: None }
    }

    pub fn with_kind(geometry: MultiPolygon<f64>, kind: impl Into<String>) -> Self {
        Self { geometry, kind: Some(kind.into()) }
    }

    /// Normalized building type: absent, empty, or generic tags map to
    /// "General"; anything else passes through unchanged.
    pub fn normalized_kind(&self) -> String {
        match self.kind.as_deref() {
            None | Some(GENERIC_TAG) | Some("") => "General".to_string(),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footprint(kind: Option<&str>) -> BuildingFootprint {
        let geometry = MultiPolygon::new(vec![]);
        match kind {
            Some(k) => BuildingFootprint::with_kind(geometry, k),
            None => BuildingFootprint::new(geometry),
        }
    }

    #[test]
    fn missing_tag_is_general() {
        assert_eq!(footprint(None).normalized_kind(), "General");
    }

    #[test]
    fn generic_sentinel_is_general() {
        assert_eq!(footprint(Some("yes")).normalized_kind(), "General");
        assert_eq!(footprint(Some("")).normalized_kind(), "General");
    }

    #[test]
    fn real_tags_pass_through() {
        assert_eq!(footprint(Some("residential")).normalized_kind(), "residential");
        assert_eq!(footprint(Some("commercial")).normalized_kind(), "commercial");
    }
}
