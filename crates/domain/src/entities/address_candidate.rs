//! Address candidate entity

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// One ranked geocoding result offered to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressCandidate {
    /// 0-based rank within the result set
    pub id: usize,
    /// Street name, or a place name when the result has no street
    pub street: String,
    /// House number, empty when absent
    pub house_number: String,
    /// Postal code, empty when absent
    pub postal_code: String,
    /// City, empty when absent
    pub city: String,
    /// Position of the result, when the geocoder reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
}

impl AddressCandidate {
    /// Full display text: street, house number, postal code and city,
    /// skipping the empty parts
    #[must_use]
    pub fn label(&self) -> String {
        [
            self.street.as_str(),
            self.house_number.as_str(),
            self.postal_code.as_str(),
            self.city.as_str(),
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}
