//! GeoJSON export of a computed route

use application::{ArtifactStyle, RouteOutcome};
use domain::{GeoLocation, RouteGeometry};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

fn position(point: &GeoLocation) -> Vec<f64> {
    point.to_lon_lat().to_vec()
}

fn geometry(route: &RouteGeometry) -> Geometry {
    let value = match route {
        RouteGeometry::LineString(line) => Value::LineString(line.iter().map(position).collect()),
        RouteGeometry::MultiLineString(lines) => Value::MultiLineString(
            lines
                .iter()
                .map(|line| line.iter().map(position).collect())
                .collect(),
        ),
    };
    Geometry::new(value)
}

/// Build a one-feature collection carrying the route, its summary and style
pub fn route_feature_collection(
    route: &RouteGeometry,
    style: &ArtifactStyle,
    outcome: &RouteOutcome,
) -> FeatureCollection {
    let mut properties = JsonObject::new();
    properties.insert(
        "distance_m".to_string(),
        json!(outcome.summary.distance_meters),
    );
    properties.insert(
        "duration_s".to_string(),
        json!(outcome.summary.duration_seconds),
    );
    properties.insert("summary".to_string(), json!(outcome.summary.to_string()));
    properties.insert("instructions".to_string(), json!(outcome.instructions));
    properties.insert("stroke".to_string(), json!(style.stroke_color));
    properties.insert("stroke-width".to_string(), json!(style.stroke_width));

    FeatureCollection {
        bbox: route.bounds().map(|b| {
            let [west, south] = b.south_west.to_lon_lat();
            let [east, north] = b.north_east.to_lon_lat();
            vec![west, south, east, north]
        }),
        features: vec![Feature {
            bbox: None,
            id: None,
            geometry: Some(geometry(route)),
            properties: Some(properties),
            foreign_members: None,
        }],
        foreign_members: None,
    }
}
