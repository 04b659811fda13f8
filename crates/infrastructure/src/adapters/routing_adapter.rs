//! Routing adapter - Implements RoutingPort using integration_routing

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::{RouteRequestParams, RouteResult, RouteSummary};
use integration_routing::{HttpRouteClient, RouteClient, RoutingConfig, RoutingError};
use tracing::instrument;

/// Adapter for route computation over the `routejson` back end
pub struct HttpRoutingAdapter {
    client: Arc<dyn RouteClient>,
}

impl std::fmt::Debug for HttpRoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRoutingAdapter")
            .field("client", &"RouteClient")
            .finish()
    }
}

impl HttpRoutingAdapter {
    /// Create an adapter with an HTTP client built from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &RoutingConfig) -> Result<Self, ApplicationError> {
        let client = HttpRouteClient::new(config).map_err(map_routing_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around an existing client
    #[must_use]
    pub fn with_client(client: Arc<dyn RouteClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoutingPort for HttpRoutingAdapter {
    #[instrument(skip(self, params), fields(mode = %params.mode()))]
    async fn compute_route(
        &self,
        params: &RouteRequestParams,
    ) -> Result<RouteResult, ApplicationError> {
        let route = self
            .client
            .route(params.start_address(), params.end_address(), params.mode())
            .await
            .map_err(map_routing_error)?;

        Ok(RouteResult::new(
            route.geometry,
            RouteSummary::new(route.distance_meters, route.duration_seconds),
        )
        .with_instructions(route.instructions))
    }
}

/// Map routing client errors onto the application taxonomy
pub(crate) fn map_routing_error(err: RoutingError) -> ApplicationError {
    match err {
        RoutingError::RequestFailed { status } => {
            ApplicationError::http_status(status, "route request failed")
        },
        RoutingError::Rejected(msg) => {
            ApplicationError::network(format!("route request rejected: {msg}"))
        },
        RoutingError::ParseError(msg) => {
            ApplicationError::Parse(format!("route response: {msg}"))
        },
        err @ (RoutingError::ConnectionFailed(_) | RoutingError::Timeout { .. }) => {
            ApplicationError::network(err.to_string())
        },
    }
}
