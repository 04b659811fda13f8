//! Route response models
//!
//! The back end relays either a GeoJSON feature collection or a directions
//! document, and answers `{"error": ...}` when an address is missing.

use domain::{GeoLocation, RouteGeometry};
use serde::{Deserialize, Serialize};

use crate::error::RoutingError;
use crate::polyline;

/// A parsed route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    /// Line geometry
    pub geometry: RouteGeometry,
    /// Total distance in meters
    pub distance_meters: f64,
    /// Total travel time in seconds
    pub duration_seconds: f64,
    /// Step instructions in order, empty when the service sent none
    pub instructions: Vec<String>,
}

impl RouteResponse {
    /// Parse a response body
    ///
    /// # Errors
    ///
    /// Returns `Rejected` for an error document and `ParseError` for any
    /// body without a usable first route.
    pub fn from_body(body: &str) -> Result<Self, RoutingError> {
        let raw: RawRouteBody =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;

        match raw {
            RawRouteBody::Error { error } => Err(RoutingError::Rejected(match error {
                serde_json::Value::String(message) => message,
                other => other.to_string(),
            })),
            RawRouteBody::FeatureCollection { features } => {
                let feature = features
                    .into_iter()
                    .next()
                    .ok_or_else(|| RoutingError::ParseError("no features in response".into()))?;
                Ok(Self {
                    geometry: feature.geometry.into_route_geometry()?,
                    distance_meters: feature.properties.summary.distance,
                    duration_seconds: feature.properties.summary.duration,
                    instructions: instructions(feature.properties.segments),
                })
            },
            RawRouteBody::Directions { routes } => {
                let route = routes
                    .into_iter()
                    .next()
                    .ok_or_else(|| RoutingError::ParseError("no routes in response".into()))?;
                let geometry = match route.geometry {
                    RawRouteGeometry::Encoded(encoded) => RouteGeometry::LineString(
                        polyline::decode(&encoded, polyline::DEFAULT_PRECISION)
                            .map_err(RoutingError::ParseError)?,
                    ),
                    RawRouteGeometry::Object(geometry) => geometry.into_route_geometry()?,
                };
                Ok(Self {
                    geometry,
                    distance_meters: route.summary.distance,
                    duration_seconds: route.summary.duration,
                    instructions: instructions(route.segments),
                })
            },
        }
    }
}

fn instructions(segments: Vec<RawSegment>) -> Vec<String> {
    segments
        .into_iter()
        .flat_map(|segment| segment.steps)
        .map(|step| step.instruction)
        .filter(|instruction| !instruction.is_empty())
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRouteBody {
    Error { error: serde_json::Value },
    FeatureCollection { features: Vec<RawFeature> },
    Directions { routes: Vec<RawRoute> },
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    geometry: RawGeometry,
    #[serde(default)]
    properties: RawProperties,
}

#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    #[serde(default)]
    summary: RawSummary,
    #[serde(default)]
    segments: Vec<RawSegment>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    geometry: RawRouteGeometry,
    #[serde(default)]
    summary: RawSummary,
    #[serde(default)]
    segments: Vec<RawSegment>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRouteGeometry {
    Encoded(String),
    Object(RawGeometry),
}

#[derive(Debug, Default, Deserialize)]
struct RawSummary {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct RawSegment {
    #[serde(default)]
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    #[serde(default)]
    instruction: String,
}

/// GeoJSON line geometry with `[lon, lat]` positions
#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
enum RawGeometry {
    LineString(Vec<Vec<f64>>),
    MultiLineString(Vec<Vec<Vec<f64>>>),
}

impl RawGeometry {
    fn into_route_geometry(self) -> Result<RouteGeometry, RoutingError> {
        match self {
            Self::LineString(line) => Ok(RouteGeometry::LineString(positions(&line)?)),
            Self::MultiLineString(lines) => Ok(RouteGeometry::MultiLineString(
                lines
                    .iter()
                    .map(|line| positions(line))
                    .collect::<Result<_, _>>()?,
            )),
        }
    }
}

fn positions(line: &[Vec<f64>]) -> Result<Vec<GeoLocation>, RoutingError> {
    line.iter()
        .map(|position| {
            GeoLocation::from_lon_lat(position).map_err(|e| RoutingError::ParseError(e.to_string()))
        })
        .collect()
}
