use geo::{Coord, MapCoords};
use proj4rs::{proj::Proj as Proj4, transform::transform};

use crate::error::EncroachmentError;

/// Source geographic CRS. Inputs are standard web-mapping lon/lat (WGS84).
const WGS84_PROJ4: &str = "+proj=longlat +datum=WGS84 +no_defs +type=crs";

/// A lon/lat ↔ UTM transform pair for one analysis region.
///
/// The zone is picked once, from the corridor's bounding-box centre, so
/// every geometry in the invocation shares a single planar CRS; distances
/// and areas computed in it are metres and square metres.
pub(crate) struct MetricProjection {
    geographic: Proj4,
    metric: Proj4,
}

impl MetricProjection {
    /// Build the transform pair for a region centred at `center` (lon/lat).
    /// WGS84 UTM: 326zz in the northern hemisphere, 327zz in the southern.
    pub(crate) fn for_center(center: Coord<f64>) -> Result<Self, EncroachmentError> {
        let zone = (((center.x + 180.0) / 6.0).floor() as i32 + 1).clamp(1, 60);
        let south = if center.y >= 0.0 { "" } else { " +south" };
        let metric_proj4 =
            format!("+proj=utm +zone={zone}{south} +datum=WGS84 +units=m +no_defs +type=crs");

        let geographic = Proj4::from_proj_string(WGS84_PROJ4)
            .map_err(|e| EncroachmentError::Projection(format!("source CRS: {e}")))?;
        let metric = Proj4::from_proj_string(&metric_proj4)
            .map_err(|e| EncroachmentError::Projection(format!("target CRS {metric_proj4}: {e}")))?;

        Ok(Self { geographic, metric })
    }

    /// Reproject lon/lat degrees into UTM metres.
    pub(crate) fn to_metric<G>(&self, geometry: &G) -> Result<G::Output, EncroachmentError>
    where
        G: MapCoords<f64, f64>,
    {
        geometry.try_map_coords(|coord| {
            // Radians in, metres out.
            let mut point = (coord.x.to_radians(), coord.y.to_radians(), 0.0);
            transform(&self.geographic, &self.metric, &mut point).map_err(|e| {
                EncroachmentError::Projection(format!(
                    "({:.6}, {:.6}) to metric: {e}",
                    coord.x, coord.y
                ))
            })?;
            Ok(Coord { x: point.0, y: point.1 })
        })
    }

    /// Reproject UTM metres back into lon/lat degrees.
    pub(crate) fn to_geographic<G>(&self, geometry: &G) -> Result<G::Output, EncroachmentError>
    where
        G: MapCoords<f64, f64>,
    {
        geometry.try_map_coords(|coord| {
            let mut point = (coord.x, coord.y, 0.0);
            transform(&self.metric, &self.geographic, &mut point).map_err(|e| {
                EncroachmentError::Projection(format!(
                    "({:.1}, {:.1}) to geographic: {e}",
                    coord.x, coord.y
                ))
            })?;
            // Geographic output is radians; callers expect degrees.
            Ok(Coord { x: point.0.to_degrees(), y: point.1.to_degrees() })
        })
    }
}
