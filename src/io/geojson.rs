//! GeoJSON export of encroachment records and the reserve zone.

use anyhow::{Context, Result};
use geo::MultiPolygon;
use serde_json::{json, Value};

use crate::types::EncroachmentRecord;

/// Records as a GeoJSON FeatureCollection, each footprint carrying the same
/// properties as the tabular export.
pub fn records_to_geojson_bytes(records: &[EncroachmentRecord]) -> Result<Vec<u8>> {
    let features: Vec<Value> = records
        .iter()
        .map(|record| {
            json!({
                "type": "Feature",
                "geometry": multipolygon_json(&record.geometry),
                "properties": {
                    "severity": record.severity.to_str(),
                    "building_type": record.building_type,
                    "encroachment_depth": record.encroachment_depth,
                    "distance_to_road": record.distance_to_road,
                    "total_area_sqm": record.total_area_sqm,
                    "encroached_area_sqm": record.encroached_area_sqm,
                    "encroachment_ratio": record.encroachment_ratio,
                    "latitude": record.latitude,
                    "longitude": record.longitude,
                }
            })
        })
        .collect();

    serde_json::to_vec(&json!({
        "type": "FeatureCollection",
        "features": features,
    }))
    .context("[io::geojson] Failed to serialize records")
}

/// The reserve zone as a single GeoJSON Feature.
pub fn reserve_to_geojson_bytes(
    reserve: &MultiPolygon<f64>,
    buffer_distance_m: f64,
) -> Result<Vec<u8>> {
    serde_json::to_vec(&json!({
        "type": "Feature",
        "geometry": multipolygon_json(reserve),
        "properties": { "buffer_distance_m": buffer_distance_m },
    }))
    .context("[io::geojson] Failed to serialize reserve zone")
}

/// GeoJSON MultiPolygon geometry object: per polygon, the exterior ring
/// followed by its interior rings.
fn multipolygon_json(mp: &MultiPolygon<f64>) -> Value {
    let polygons: Vec<Value> = mp
        .0
        .iter()
        .map(|polygon| {
            let mut rings: Vec<Vec<Vec<f64>>> = Vec::with_capacity(1 + polygon.interiors().len());
            rings.push(polygon.exterior().coords().map(|c| vec![c.x, c.y]).collect());
            for interior in polygon.interiors() {
                rings.push(interior.coords().map(|c| vec![c.x, c.y]).collect());
            }
            json!(rings)
        })
        .collect();

    json!({ "type": "MultiPolygon", "coordinates": polygons })
}
