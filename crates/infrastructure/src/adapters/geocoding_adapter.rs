//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::AddressCandidate;
use integration_geocoding::{
    GeocodingClient, GeocodingError, PhotonConfig, PhotonGeocodingClient, Place,
};
use tracing::{debug, instrument};

/// Adapter for address autocomplete backed by Photon
pub struct PhotonGeocodingAdapter {
    client: Arc<dyn GeocodingClient>,
}

impl std::fmt::Debug for PhotonGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotonGeocodingAdapter")
            .field("client", &"GeocodingClient")
            .finish()
    }
}

impl PhotonGeocodingAdapter {
    /// Create an adapter with a Photon client built from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &PhotonConfig) -> Result<Self, ApplicationError> {
        let client = PhotonGeocodingClient::new(config).map_err(map_geocoding_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around an existing client
    #[must_use]
    pub fn with_client(client: Arc<dyn GeocodingClient>) -> Self {
        Self { client }
    }

    /// Convert a ranked place into a candidate
    fn to_candidate(rank: usize, place: Place) -> AddressCandidate {
        let street = place.street_or_name().unwrap_or_default().to_string();
        AddressCandidate {
            id: rank,
            street,
            house_number: place.house_number.unwrap_or_default(),
            postal_code: place.postcode.unwrap_or_default(),
            city: place.city.unwrap_or_default(),
            location: place.location,
        }
    }
}

#[async_trait]
impl GeocodingPort for PhotonGeocodingAdapter {
    #[instrument(skip(self))]
    async fn suggest(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<AddressCandidate>, ApplicationError> {
        let places = self
            .client
            .search(query, limit)
            .await
            .map_err(map_geocoding_error)?;

        debug!(count = places.len(), "Converted places to candidates");
        Ok(places
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(rank, place)| Self::to_candidate(rank, place))
            .collect())
    }
}

/// Map geocoding client errors onto the application taxonomy
pub(crate) fn map_geocoding_error(err: GeocodingError) -> ApplicationError {
    match err {
        GeocodingError::RequestFailed { status } => {
            ApplicationError::http_status(status, "address search failed")
        },
        GeocodingError::ParseError(msg) => {
            ApplicationError::Parse(format!("address search response: {msg}"))
        },
        err @ (GeocodingError::ConnectionFailed(_) | GeocodingError::Timeout { .. }) => {
            ApplicationError::network(err.to_string())
        },
    }
}
