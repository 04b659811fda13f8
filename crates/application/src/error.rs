//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error, including route-request validation failures
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request failed or the service answered with a non-success status
    #[error("Network error{}: {message}", status_suffix(.status))]
    Network {
        /// HTTP status code, when a response was received
        status: Option<u16>,
        /// Description of the failure
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl ApplicationError {
    /// Network error without a status code
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            status: None,
            message: message.into(),
        }
    }

    /// Network error for a non-success HTTP status
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::Network {
            status: Some(status),
            message: message.into(),
        }
    }

    /// True for missing start/end address or travel mode
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(err) if err.is_missing_field())
    }

    /// HTTP status carried by a network error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Network { status, .. } => *status,
            _ => None,
        }
    }

    /// Check if the caller may retry the operation
    ///
    /// Nothing is retried automatically.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network { status: None, .. } => true,
            Self::Network {
                status: Some(status),
                ..
            } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Message suitable for a visible notice in the UI
    #[must_use]
    pub fn user_notice(&self) -> String {
        match self {
            Self::Domain(DomainError::MissingStartAddress) => {
                "Please enter a start address.".to_string()
            },
            Self::Domain(DomainError::MissingEndAddress) => {
                "Please enter a destination address.".to_string()
            },
            Self::Domain(DomainError::MissingTravelMode) => {
                "Please choose a travel mode.".to_string()
            },
            Self::Network {
                status: Some(status),
                ..
            } => format!("The service answered with error code {status}."),
            Self::Network { status: None, .. } => {
                "The service could not be reached. Please try again.".to_string()
            },
            Self::Parse(_) => "The service returned an unexpected response.".to_string(),
            other => other.to_string(),
        }
    }
}
