//! Port definitions for application layer
//!
//! Ports are interfaces that define how the controllers interact with
//! external systems: the geocoding and routing services, the map surface
//! and the suggestion list UI. Adapters implement these ports.

mod geocoding_port;
mod map_surface_port;
mod routing_port;
mod suggestion_view_port;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::{GeocodingPort, MAX_SUGGESTIONS};
#[cfg(test)]
pub use map_surface_port::MockMapSurfacePort;
pub use map_surface_port::{ArtifactHandle, ArtifactStyle, MapSurfacePort};
#[cfg(test)]
pub use routing_port::MockRoutingPort;
pub use routing_port::RoutingPort;
#[cfg(test)]
pub use suggestion_view_port::MockSuggestionViewPort;
pub use suggestion_view_port::SuggestionViewPort;
