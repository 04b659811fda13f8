//! Photon response models

use domain::GeoLocation;
use serde::{Deserialize, Serialize};

/// A place returned by the geocoder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Name of the place (POI, building, town...)
    pub name: Option<String>,
    /// Street name
    pub street: Option<String>,
    /// House number
    pub house_number: Option<String>,
    /// Postal code
    pub postcode: Option<String>,
    /// City
    pub city: Option<String>,
    /// Position, when valid coordinates were reported
    pub location: Option<GeoLocation>,
}

impl Place {
    /// Street name, falling back to the place name
    #[must_use]
    pub fn street_or_name(&self) -> Option<&str> {
        self.street
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.name.as_deref())
    }
}

/// Raw Photon feature collection
#[derive(Debug, Deserialize)]
pub(crate) struct PhotonResponse {
    pub features: Vec<PhotonFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PhotonFeature {
    #[serde(default)]
    pub geometry: Option<PhotonGeometry>,
    #[serde(default)]
    pub properties: PhotonProperties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PhotonGeometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PhotonProperties {
    pub name: Option<String>,
    pub street: Option<String>,
    pub housenumber: Option<String>,
    pub postcode: Option<String>,
    pub city: Option<String>,
}

impl From<PhotonFeature> for Place {
    fn from(feature: PhotonFeature) -> Self {
        let location = feature
            .geometry
            .and_then(|g| GeoLocation::from_lon_lat(&g.coordinates).ok());
        let props = feature.properties;
        Self {
            name: props.name,
            street: props.street,
            house_number: props.housenumber,
            postcode: props.postcode,
            city: props.city,
            location,
        }
    }
}
