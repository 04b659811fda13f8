//! Free-text address query entity

use serde::{Deserialize, Serialize};

use crate::value_objects::Origin;

/// Raw text typed into one of the address fields
///
/// Lives until a candidate is selected or a newer query for the same
/// origin supersedes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressQuery {
    /// Field the text came from
    pub origin: Origin,
    /// Field value as typed, untrimmed
    pub raw_text: String,
}

impl AddressQuery {
    /// Create a query for `origin`
    pub fn new(origin: Origin, raw_text: impl Into<String>) -> Self {
        Self {
            origin,
            raw_text: raw_text.into(),
        }
    }

    /// The text to send to the geocoder
    #[must_use]
    pub fn text(&self) -> &str {
        self.raw_text.trim()
    }

    /// True when there is nothing to search for
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text().is_empty()
    }
}
