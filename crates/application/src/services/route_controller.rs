//! Route request controller
//!
//! Validates the two addresses and the travel mode, asks the routing port for
//! a route and keeps exactly one route artifact live on the map surface.

use std::fmt;
use std::sync::Arc;

use domain::{RouteRequestParams, RouteSummary, TravelMode};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{ArtifactHandle, ArtifactStyle, MapSurfacePort, RoutingPort};

/// Where the controller is in its request lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RouteControllerState {
    /// No request made yet, or cleared
    #[default]
    Idle,
    /// Checking start, end and mode
    Validating,
    /// Waiting on the routing service
    Fetching,
    /// Swapping the map artifact
    Installing,
    /// Last request failed; any previous artifact stays live
    Failed(String),
    /// A route artifact is on the map
    Live,
}

impl fmt::Display for RouteControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Validating => write!(f, "validating"),
            Self::Fetching => write!(f, "fetching"),
            Self::Installing => write!(f, "installing"),
            Self::Failed(message) => write!(f, "failed: {message}"),
            Self::Live => write!(f, "live"),
        }
    }
}

/// Result of a successful route request
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOutcome {
    /// The artifact now live on the map surface
    pub handle: ArtifactHandle,
    /// Distance and duration
    pub summary: RouteSummary,
    /// Step instructions, possibly empty
    pub instructions: Vec<String>,
}

/// Route controller with single-live-artifact semantics
pub struct RouteRequestController {
    routing: Arc<dyn RoutingPort>,
    surface: Arc<dyn MapSurfacePort>,
    style: ArtifactStyle,
    live: Mutex<Option<ArtifactHandle>>,
    state: Mutex<RouteControllerState>,
}

impl fmt::Debug for RouteRequestController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRequestController")
            .field("style", &self.style)
            .field("live", &*self.live.lock())
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

impl RouteRequestController {
    /// Create a controller drawing artifacts with `style`
    pub fn new(
        routing: Arc<dyn RoutingPort>,
        surface: Arc<dyn MapSurfacePort>,
        style: ArtifactStyle,
    ) -> Self {
        Self {
            routing,
            surface,
            style,
            live: Mutex::new(None),
            state: Mutex::new(RouteControllerState::Idle),
        }
    }

    /// Request a route and make it the live artifact
    ///
    /// Validation happens before any request; at most one routing request
    /// is made per call and nothing is retried.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Domain` when start, end or mode is missing
    /// - `ApplicationError::Network` when the request fails or is rejected
    /// - `ApplicationError::Parse` when the response is malformed or the
    ///   route has no geometry
    ///
    /// On error the previously live artifact, if any, stays on the map.
    #[instrument(skip(self, start, end))]
    pub async fn compute_route(
        &self,
        start: &str,
        end: &str,
        mode: Option<TravelMode>,
    ) -> Result<RouteOutcome, ApplicationError> {
        let result = self.run(start, end, mode).await;
        if let Err(e) = &result {
            warn!(error = %e, "Route request failed");
            self.set_state(RouteControllerState::Failed(e.to_string()));
        }
        result
    }

    async fn run(
        &self,
        start: &str,
        end: &str,
        mode: Option<TravelMode>,
    ) -> Result<RouteOutcome, ApplicationError> {
        self.set_state(RouteControllerState::Validating);
        let params = RouteRequestParams::new(start, end, mode)?;

        self.set_state(RouteControllerState::Fetching);
        debug!(
            start = params.start_address(),
            end = params.end_address(),
            profile = params.mode().profile(),
            "Requesting route"
        );
        let route = self.routing.compute_route(&params).await?;

        self.set_state(RouteControllerState::Installing);
        if route.geometry.is_empty() {
            return Err(ApplicationError::Parse(
                "route geometry has no coordinates".to_string(),
            ));
        }

        let handle = {
            let mut live = self.live.lock();
            if let Some(previous) = live.take() {
                debug!(%previous, "Retiring route artifact");
                self.surface.remove_artifact(previous);
            }
            let handle = self.surface.add_artifact(&route.geometry, &self.style);
            *live = Some(handle);
            handle
        };
        if route.geometry.bounds().is_some() {
            self.surface.fit_bounds(handle);
        }

        self.set_state(RouteControllerState::Live);
        info!(%handle, summary = %route.summary, "Route installed");

        Ok(RouteOutcome {
            handle,
            summary: route.summary,
            instructions: route.instructions,
        })
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> RouteControllerState {
        self.state.lock().clone()
    }

    /// Handle of the live route artifact
    #[must_use]
    pub fn live_artifact(&self) -> Option<ArtifactHandle> {
        *self.live.lock()
    }

    /// Remove the live artifact, if any, and return to idle
    #[instrument(skip(self))]
    pub fn clear(&self) {
        if let Some(previous) = self.live.lock().take() {
            debug!(%previous, "Retiring route artifact");
            self.surface.remove_artifact(previous);
        }
        self.set_state(RouteControllerState::Idle);
    }

    fn set_state(&self, state: RouteControllerState) {
        *self.state.lock() = state;
    }
}

#[cfg(test)]
mod tests {
    use domain::{DomainError, GeoLocation, RouteGeometry, RouteResult};
    use mockall::Sequence;
    use mockall::predicate::eq;

    use super::*;
    use crate::ports::{MockMapSurfacePort, MockRoutingPort};
    use crate::testing::RecordingMapSurface;

    fn point(lat: f64, lon: f64) -> GeoLocation {
        GeoLocation::new_unchecked(lat, lon)
    }

    fn bergamo_milano() -> RouteResult {
        RouteResult::new(
            RouteGeometry::LineString(vec![
                point(45.695, 9.67),
                point(45.6, 9.5),
                point(45.464, 9.19),
            ]),
            RouteSummary::new(52_000.0, 3_600.0),
        )
        .with_instructions(vec![
            "Head south".to_string(),
            "Arrive at Milano".to_string(),
        ])
    }

    fn routing_returning(result: RouteResult) -> MockRoutingPort {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_compute_route()
            .returning(move |_| Ok(result.clone()));
        routing
    }

    fn controller(
        routing: MockRoutingPort,
        surface: Arc<dyn MapSurfacePort>,
    ) -> RouteRequestController {
        RouteRequestController::new(Arc::new(routing), surface, ArtifactStyle::default())
    }

    #[tokio::test]
    async fn starts_idle() {
        let controller = controller(
            MockRoutingPort::new(),
            Arc::new(RecordingMapSurface::default()),
        );
        assert_eq!(controller.state(), RouteControllerState::Idle);
        assert!(controller.live_artifact().is_none());
    }

    #[tokio::test]
    async fn missing_fields_fail_without_request() {
        let mut routing = MockRoutingPort::new();
        routing.expect_compute_route().times(0);
        let surface = Arc::new(RecordingMapSurface::default());
        let controller = controller(routing, surface.clone());

        let err = controller
            .compute_route("", "Milano", Some(TravelMode::Car))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::MissingStartAddress)
        ));

        let err = controller
            .compute_route("Bergamo", "  ", Some(TravelMode::Car))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::MissingEndAddress)
        ));

        let err = controller
            .compute_route("Bergamo", "Milano", None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::MissingTravelMode)
        ));
        assert!(err.is_validation());

        assert!(matches!(controller.state(), RouteControllerState::Failed(_)));
        assert_eq!(surface.live_count(), 0);
    }

    #[tokio::test]
    async fn bergamo_to_milano_installs_one_artifact() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_compute_route()
            .withf(|params| {
                params.start_address() == "Bergamo"
                    && params.end_address() == "Milano"
                    && params.mode() == TravelMode::Car
            })
            .times(1)
            .returning(|_| Ok(bergamo_milano()));
        let surface = Arc::new(RecordingMapSurface::default());
        let controller = controller(routing, surface.clone());

        let outcome = controller
            .compute_route("Bergamo", "Milano", Some(TravelMode::Car))
            .await
            .unwrap();

        assert_eq!(outcome.summary.to_string(), "52.0 km / 1.0 h");
        assert_eq!(outcome.instructions.len(), 2);
        assert_eq!(surface.live_count(), 1);
        assert_eq!(surface.fitted(), vec![outcome.handle]);
        assert_eq!(controller.live_artifact(), Some(outcome.handle));
        assert_eq!(controller.state(), RouteControllerState::Live);
    }

    #[tokio::test]
    async fn repeated_requests_keep_one_live_artifact() {
        let surface = Arc::new(RecordingMapSurface::default());
        let controller = controller(routing_returning(bergamo_milano()), surface.clone());

        let first = controller
            .compute_route("Bergamo", "Milano", Some(TravelMode::Car))
            .await
            .unwrap();
        let second = controller
            .compute_route("Bergamo", "Milano", Some(TravelMode::Car))
            .await
            .unwrap();

        assert_ne!(first.handle, second.handle);
        assert_eq!(surface.live_count(), 1);
        assert_eq!(surface.live(), vec![second.handle]);
    }

    #[tokio::test]
    async fn retires_before_installing() {
        let mut surface = MockMapSurfacePort::new();
        let mut seq = Sequence::new();
        surface
            .expect_add_artifact()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| ArtifactHandle::new(1));
        surface
            .expect_fit_bounds()
            .with(eq(ArtifactHandle::new(1)))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        surface
            .expect_remove_artifact()
            .with(eq(ArtifactHandle::new(1)))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        surface
            .expect_add_artifact()
            .withf(|_, style| style.stroke_color == "red" && style.stroke_width == 4)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| ArtifactHandle::new(2));
        surface
            .expect_fit_bounds()
            .with(eq(ArtifactHandle::new(2)))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let controller = controller(routing_returning(bergamo_milano()), Arc::new(surface));

        controller
            .compute_route("Bergamo", "Milano", Some(TravelMode::Car))
            .await
            .unwrap();
        let outcome = controller
            .compute_route("Bergamo", "Milano", Some(TravelMode::Walk))
            .await
            .unwrap();

        assert_eq!(outcome.handle, ArtifactHandle::new(2));
    }

    #[tokio::test]
    async fn network_failure_keeps_previous_artifact() {
        let mut routing = MockRoutingPort::new();
        let mut seq = Sequence::new();
        routing
            .expect_compute_route()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(bergamo_milano()));
        routing
            .expect_compute_route()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ApplicationError::http_status(503, "unavailable")));
        let surface = Arc::new(RecordingMapSurface::default());
        let controller = controller(routing, surface.clone());

        let installed = controller
            .compute_route("Bergamo", "Milano", Some(TravelMode::Bike))
            .await
            .unwrap();
        let err = controller
            .compute_route("Bergamo", "Brescia", Some(TravelMode::Bike))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(503));
        assert_eq!(surface.live(), vec![installed.handle]);
        assert_eq!(controller.live_artifact(), Some(installed.handle));
        assert!(matches!(controller.state(), RouteControllerState::Failed(msg) if msg.contains("503")));
    }

    #[tokio::test]
    async fn parse_failure_is_returned_unchanged() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_compute_route()
            .times(1)
            .returning(|_| Err(ApplicationError::Parse("missing routes".to_string())));
        let surface = Arc::new(RecordingMapSurface::default());
        let controller = controller(routing, surface.clone());

        let err = controller
            .compute_route("Bergamo", "Milano", Some(TravelMode::Transit))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Parse(msg) if msg == "missing routes"));
        assert_eq!(surface.live_count(), 0);
    }

    #[tokio::test]
    async fn empty_geometry_is_not_installed() {
        let empty = RouteResult::new(
            RouteGeometry::LineString(Vec::new()),
            RouteSummary::new(0.0, 0.0),
        );
        let surface = Arc::new(RecordingMapSurface::default());
        let controller = controller(routing_returning(empty), surface.clone());

        let err = controller
            .compute_route("Bergamo", "Bergamo", Some(TravelMode::Walk))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Parse(_)));
        assert_eq!(surface.live_count(), 0);
        assert!(controller.live_artifact().is_none());
    }

    #[tokio::test]
    async fn multi_line_geometry_is_installed() {
        let route = RouteResult::new(
            RouteGeometry::MultiLineString(vec![
                vec![point(45.695, 9.67), point(45.65, 9.6)],
                vec![point(45.65, 9.6), point(45.464, 9.19)],
            ]),
            RouteSummary::new(52_000.0, 3_600.0),
        );
        let surface = Arc::new(RecordingMapSurface::default());
        let controller = controller(routing_returning(route), surface.clone());

        let outcome = controller
            .compute_route("Bergamo", "Milano", Some(TravelMode::Car))
            .await
            .unwrap();

        assert!(outcome.instructions.is_empty());
        assert_eq!(surface.live_count(), 1);
    }

    #[tokio::test]
    async fn clear_retires_live_artifact() {
        let surface = Arc::new(RecordingMapSurface::default());
        let controller = controller(routing_returning(bergamo_milano()), surface.clone());
        controller
            .compute_route("Bergamo", "Milano", Some(TravelMode::Car))
            .await
            .unwrap();

        controller.clear();

        assert_eq!(surface.live_count(), 0);
        assert!(controller.live_artifact().is_none());
        assert_eq!(controller.state(), RouteControllerState::Idle);

        // Clearing again is a no-op.
        controller.clear();
        assert_eq!(surface.live_count(), 0);
    }

    #[tokio::test]
    async fn concurrent_requests_leave_one_live_artifact() {
        let surface = Arc::new(RecordingMapSurface::default());
        let controller = Arc::new(controller(
            routing_returning(bergamo_milano()),
            surface.clone(),
        ));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let controller = Arc::clone(&controller);
                tokio::spawn(async move {
                    controller
                        .compute_route("Bergamo", "Milano", Some(TravelMode::Car))
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(surface.live_count(), 1);
        assert_eq!(surface.live(), vec![controller.live_artifact().unwrap()]);
    }

    #[test]
    fn state_display() {
        assert_eq!(RouteControllerState::Live.to_string(), "live");
        assert_eq!(
            RouteControllerState::Failed("boom".to_string()).to_string(),
            "failed: boom"
        );
    }
}
