//! Travel mode value object and the mutually exclusive mode selector

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Means of transport a route is computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// Driving
    Car,
    /// Cycling
    Bike,
    /// Walking
    Walk,
    /// Public transport
    Transit,
}

impl TravelMode {
    /// Every selectable mode, in selector order
    pub const ALL: [Self; 4] = [Self::Car, Self::Bike, Self::Walk, Self::Transit];

    /// Short lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::Walk => "walk",
            Self::Transit => "transit",
        }
    }

    /// Routing profile string sent to the route endpoint
    #[must_use]
    pub const fn profile(&self) -> &'static str {
        match self {
            Self::Car => "driving-car",
            Self::Bike => "cycling-regular",
            Self::Walk => "foot-walking",
            Self::Transit => "public-transport",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TravelMode {
    type Err = DomainError;

    /// Accepts either the short name or the routing profile
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == normalized || mode.profile() == normalized)
            .ok_or(DomainError::UnknownTravelMode(normalized))
    }
}

/// Mutually exclusive travel mode selection
///
/// Starts with nothing selected. Selecting a mode replaces the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TravelModeSelector {
    selected: Option<TravelMode>,
}

impl TravelModeSelector {
    /// Create a selector with nothing selected
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Select `mode`, returning the mode it replaced
    pub fn select(&mut self, mode: TravelMode) -> Option<TravelMode> {
        self.selected.replace(mode)
    }

    /// Deselect everything
    pub fn clear(&mut self) -> Option<TravelMode> {
        self.selected.take()
    }

    /// The selected mode, if any
    #[must_use]
    pub const fn selected(&self) -> Option<TravelMode> {
        self.selected
    }

    /// Whether `mode` is the active one
    #[must_use]
    pub fn is_selected(&self, mode: TravelMode) -> bool {
        self.selected == Some(mode)
    }
}
