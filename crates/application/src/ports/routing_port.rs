//! Routing service port

use async_trait::async_trait;
use domain::{RouteRequestParams, RouteResult};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for route computation between two free-text addresses
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Issue exactly one request for `params` and parse the route
    ///
    /// Non-success statuses surface as `ApplicationError::Network` with the
    /// status code; malformed bodies as `ApplicationError::Parse`.
    async fn compute_route(
        &self,
        params: &RouteRequestParams,
    ) -> Result<RouteResult, ApplicationError>;
}
