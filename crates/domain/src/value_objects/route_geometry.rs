//! GeoJSON-like route geometry and its bounding box

use serde::{Deserialize, Serialize};

use super::GeoLocation;

/// Route line geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum RouteGeometry {
    /// A single polyline
    LineString(Vec<GeoLocation>),
    /// Several polylines, e.g. one per route segment
    MultiLineString(Vec<Vec<GeoLocation>>),
}

impl RouteGeometry {
    /// Iterate over every vertex in drawing order
    pub fn points(&self) -> Box<dyn Iterator<Item = &GeoLocation> + '_> {
        match self {
            Self::LineString(line) => Box::new(line.iter()),
            Self::MultiLineString(lines) => Box::new(lines.iter().flatten()),
        }
    }

    /// Number of vertices
    #[must_use]
    pub fn point_count(&self) -> usize {
        match self {
            Self::LineString(line) => line.len(),
            Self::MultiLineString(lines) => lines.iter().map(Vec::len).sum(),
        }
    }

    /// True when there is nothing to draw
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Bounding box of all vertices, `None` for an empty geometry
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.points().fold(None, |acc, point| {
            Some(acc.map_or_else(|| Bounds::point(*point), |b: Bounds| b.extend(point)))
        })
    }
}

/// Axis-aligned geographic bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum latitude / longitude corner
    pub south_west: GeoLocation,
    /// Maximum latitude / longitude corner
    pub north_east: GeoLocation,
}

impl Bounds {
    /// Degenerate box around a single point
    #[must_use]
    pub const fn point(location: GeoLocation) -> Self {
        Self {
            south_west: location,
            north_east: location,
        }
    }

    /// Grow the box to include `location`
    #[must_use]
    pub fn extend(self, location: &GeoLocation) -> Self {
        Self {
            south_west: GeoLocation::new_unchecked(
                self.south_west.latitude().min(location.latitude()),
                self.south_west.longitude().min(location.longitude()),
            ),
            north_east: GeoLocation::new_unchecked(
                self.north_east.latitude().max(location.latitude()),
                self.north_east.longitude().max(location.longitude()),
            ),
        }
    }

    /// Centre of the box
    #[must_use]
    pub fn center(&self) -> GeoLocation {
        GeoLocation::new_unchecked(
            (self.south_west.latitude() + self.north_east.latitude()) / 2.0,
            (self.south_west.longitude() + self.north_east.longitude()) / 2.0,
        )
    }

    /// Whether `location` lies inside the box (edges included)
    #[must_use]
    pub fn contains(&self, location: &GeoLocation) -> bool {
        (self.south_west.latitude()..=self.north_east.latitude()).contains(&location.latitude())
            && (self.south_west.longitude()..=self.north_east.longitude())
                .contains(&location.longitude())
    }
}
