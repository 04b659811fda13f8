//! Photon geocoding client
//!
//! Searches addresses with the Photon `/api/` endpoint, biased towards a
//! configured location. Results are cached per lower-cased query.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::PhotonConfig;
use crate::error::GeocodingError;
use crate::models::{PhotonResponse, Place};

/// Trait for address search clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Return at most `limit` places matching `query`, best match first
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Place>, GeocodingError>;
}

/// Photon-based geocoding client with result caching
#[derive(Debug)]
pub struct PhotonGeocodingClient {
    client: Client,
    config: PhotonConfig,
    cache: Option<Cache<String, Vec<Place>>>,
}

impl PhotonGeocodingClient {
    /// Create a new Photon geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &PhotonConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("RouteFinder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        let cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(500)
                .time_to_live(Duration::from_secs(config.cache_ttl_minutes * 60))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            cache,
        })
    }

    fn cache_key(query: &str, limit: usize) -> String {
        format!("{limit}:{}", query.to_lowercase())
    }

    async fn cached(&self, key: &str) -> Option<Vec<Place>> {
        match &self.cache {
            Some(cache) => cache.get(key).await,
            None => None,
        }
    }

    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<Place>, GeocodingError> {
        let url = format!("{}/api/", self.config.base_url.trim_end_matches('/'));
        let params = [
            ("q", query.to_string()),
            ("lat", self.config.bias_latitude.to_string()),
            ("lon", self.config.bias_longitude.to_string()),
            ("limit", limit.to_string()),
            ("lang", self.config.language.clone()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Photon returned non-success status");
            return Err(GeocodingError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;
        let parsed: PhotonResponse =
            serde_json::from_str(&body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        Ok(parsed
            .features
            .into_iter()
            .take(limit)
            .map(Place::from)
            .collect())
    }
}

#[async_trait]
impl GeocodingClient for PhotonGeocodingClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Place>, GeocodingError> {
        let query = query.trim();
        if query.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let cache_key = Self::cache_key(query, limit);
        if let Some(places) = self.cached(&cache_key).await {
            debug!(%query, "Geocoding cache hit");
            return Ok(places);
        }

        debug!(%query, "Searching addresses");
        let places = self.fetch(query, limit).await?;
        debug!(%query, count = places.len(), "Addresses found");

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, places.clone()).await;
        }
        Ok(places)
    }
}
