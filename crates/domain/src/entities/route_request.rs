//! Validated route request parameters

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::TravelMode;

/// Start address, end address and travel mode for one route computation
///
/// Only obtainable through [`RouteRequestParams::new`], so every instance has
/// non-empty addresses and a mode. Deserialization runs the same checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRouteRequestParams")]
pub struct RouteRequestParams {
    start_address: String,
    end_address: String,
    mode: TravelMode,
}

/// Unvalidated wire form
#[derive(Deserialize)]
struct RawRouteRequestParams {
    #[serde(default)]
    start_address: String,
    #[serde(default)]
    end_address: String,
    #[serde(default)]
    mode: Option<TravelMode>,
}

impl TryFrom<RawRouteRequestParams> for RouteRequestParams {
    type Error = DomainError;

    fn try_from(raw: RawRouteRequestParams) -> Result<Self, Self::Error> {
        Self::new(&raw.start_address, &raw.end_address, raw.mode)
    }
}

impl RouteRequestParams {
    /// Validate and build request parameters
    ///
    /// Addresses are trimmed. Checks run in order start, end, mode.
    ///
    /// # Errors
    ///
    /// Returns `MissingStartAddress`, `MissingEndAddress` or
    /// `MissingTravelMode` for the first field that is empty.
    pub fn new(
        start_address: &str,
        end_address: &str,
        mode: Option<TravelMode>,
    ) -> Result<Self, DomainError> {
        let start_address = start_address.trim();
        if start_address.is_empty() {
            return Err(DomainError::MissingStartAddress);
        }

        let end_address = end_address.trim();
        if end_address.is_empty() {
            return Err(DomainError::MissingEndAddress);
        }

        let mode = mode.ok_or(DomainError::MissingTravelMode)?;

        Ok(Self {
            start_address: start_address.to_string(),
            end_address: end_address.to_string(),
            mode,
        })
    }

    /// Departure address
    #[must_use]
    pub fn start_address(&self) -> &str {
        &self.start_address
    }

    /// Destination address
    #[must_use]
    pub fn end_address(&self) -> &str {
        &self.end_address
    }

    /// Travel mode
    #[must_use]
    pub const fn mode(&self) -> TravelMode {
        self.mode
    }
}
