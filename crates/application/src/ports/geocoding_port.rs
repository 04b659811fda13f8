//! Geocoding service port
//!
//! Turns free text into ranked address candidates. Adapters in the
//! infrastructure layer implement this port over an autocomplete API.

use async_trait::async_trait;
use domain::AddressCandidate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Number of candidates requested from the geocoder and shown to the user
pub const MAX_SUGGESTIONS: usize = 5;

/// Port for address autocomplete
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Return at most `limit` candidates for `query`, best match first
    ///
    /// Candidate ids are their 0-based rank. An empty vector means nothing
    /// matched and is not an error.
    async fn suggest(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<AddressCandidate>, ApplicationError>;
}
