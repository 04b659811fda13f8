//! HTTP client for the `routejson` endpoint

use std::time::Duration;

use async_trait::async_trait;
use domain::TravelMode;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::RoutingConfig;
use crate::error::RoutingError;
use crate::models::RouteResponse;

/// Trait for route computation clients
#[async_trait]
pub trait RouteClient: Send + Sync {
    /// Compute a route between two free-text addresses
    async fn route(
        &self,
        start_address: &str,
        end_address: &str,
        mode: TravelMode,
    ) -> Result<RouteResponse, RoutingError>;
}

/// Route client for the `GET /routejson` back end
#[derive(Debug)]
pub struct HttpRouteClient {
    client: Client,
    config: RoutingConfig,
}

impl HttpRouteClient {
    /// Create a new route client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("RouteFinder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl RouteClient for HttpRouteClient {
    #[instrument(skip(self))]
    async fn route(
        &self,
        start_address: &str,
        end_address: &str,
        mode: TravelMode,
    ) -> Result<RouteResponse, RoutingError> {
        let params = [
            ("startaddress", start_address),
            ("endaddress", end_address),
            ("routemode", mode.profile()),
        ];

        debug!(profile = mode.profile(), "Requesting route");

        let response = self
            .client
            .get(self.config.endpoint())
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Routing service returned non-success status");
            return Err(RoutingError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;
        let route = RouteResponse::from_body(&body)?;

        debug!(
            points = route.geometry.point_count(),
            distance = route.distance_meters,
            duration = route.duration_seconds,
            "Route received"
        );
        Ok(route)
    }
}
