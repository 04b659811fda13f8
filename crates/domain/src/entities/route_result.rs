//! Computed route entity

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::RouteGeometry;

/// Distance and travel time of a route
///
/// The routing backend reports meters and seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Total distance in meters
    pub distance_meters: f64,
    /// Total travel time in seconds
    pub duration_seconds: f64,
}

impl RouteSummary {
    /// Create a summary
    #[must_use]
    pub const fn new(distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            distance_meters,
            duration_seconds,
        }
    }

    /// Distance in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    /// Travel time in hours
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        self.duration_seconds / 3600.0
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} km / {:.1} h",
            self.distance_km(),
            self.duration_hours()
        )
    }
}

/// A route returned by the routing backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Line geometry to draw
    pub geometry: RouteGeometry,
    /// Distance and duration
    pub summary: RouteSummary,
    /// Turn-by-turn instructions, empty for geometry-only responses
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl RouteResult {
    /// Create a geometry-only route
    #[must_use]
    pub const fn new(geometry: RouteGeometry, summary: RouteSummary) -> Self {
        Self {
            geometry,
            summary,
            instructions: Vec::new(),
        }
    }

    /// Attach step instructions
    #[must_use]
    pub fn with_instructions(mut self, instructions: Vec<String>) -> Self {
        self.instructions = instructions;
        self
    }
}
