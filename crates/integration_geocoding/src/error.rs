//! Geocoding error types

use thiserror::Error;

/// Errors that can occur while searching addresses
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to the geocoder failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// The geocoder answered with a non-success status
    #[error("Geocoding request failed with HTTP {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// Failed to parse the geocoder response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Geocoding request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl GeocodingError {
    /// HTTP status, when the geocoder answered
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed(_) | Self::Timeout { .. } => true,
            Self::RequestFailed { status } => *status == 429 || *status >= 500,
            Self::ParseError(_) => false,
        }
    }
}
