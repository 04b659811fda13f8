//! Map surface port
//!
//! The rendering collaborator that draws route artifacts. Implemented by
//! whatever front end hosts the map.

use std::fmt;

use domain::RouteGeometry;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// Opaque reference to an artifact drawn on a map surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactHandle(u64);

impl ArtifactHandle {
    /// Wrap a surface-specific id
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The surface-specific id
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArtifactHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "artifact#{}", self.0)
    }
}

/// Stroke style for a route artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactStyle {
    /// CSS-style color name or hex value
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    /// Line width in pixels
    #[serde(default = "default_stroke_width")]
    pub stroke_width: u32,
}

fn default_stroke_color() -> String {
    "red".to_string()
}

const fn default_stroke_width() -> u32 {
    4
}

impl Default for ArtifactStyle {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
        }
    }
}

/// Port for drawing and removing route artifacts
#[cfg_attr(test, automock)]
pub trait MapSurfacePort: Send + Sync {
    /// Draw `geometry` and return a handle to it
    fn add_artifact(&self, geometry: &RouteGeometry, style: &ArtifactStyle) -> ArtifactHandle;

    /// Remove a previously added artifact
    fn remove_artifact(&self, handle: ArtifactHandle);

    /// Fit the visible area to the artifact's extent
    fn fit_bounds(&self, handle: ArtifactHandle);
}
