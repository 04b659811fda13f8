//! Photon geocoder configuration

use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the Photon geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotonConfig {
    /// Base URL of the Photon instance
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Preferred result language
    #[serde(default = "default_language")]
    pub language: String,

    /// Latitude results are biased towards
    #[serde(default = "default_bias_latitude")]
    pub bias_latitude: f64,

    /// Longitude results are biased towards
    #[serde(default = "default_bias_longitude")]
    pub bias_longitude: f64,

    /// Cache TTL in minutes (0 to disable caching)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u64,
}

fn default_base_url() -> String {
    "https://photon.komoot.io".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

fn default_language() -> String {
    "en".to_string()
}

// Bergamo
const fn default_bias_latitude() -> f64 {
    45.695
}

const fn default_bias_longitude() -> f64 {
    9.67
}

const fn default_cache_ttl_minutes() -> u64 {
    10
}

impl Default for PhotonConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            language: default_language(),
            bias_latitude: default_bias_latitude(),
            bias_longitude: default_bias_longitude(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
        }
    }
}

impl PhotonConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            cache_ttl_minutes: 0,
            ..Default::default()
        }
    }

    /// Check if caching is enabled
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_minutes > 0
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        Url::parse(&self.base_url).map_err(|e| format!("base_url is not a valid URL: {e}"))?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.language.trim().is_empty() {
            return Err("language must not be empty".to_string());
        }

        if !(-90.0..=90.0).contains(&self.bias_latitude)
            || !(-180.0..=180.0).contains(&self.bias_longitude)
        {
            return Err("bias coordinates are out of range".to_string());
        }

        Ok(())
    }
}
