//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod origin;
mod route_geometry;
mod travel_mode;

pub use geo_location::GeoLocation;
pub use origin::Origin;
pub use route_geometry::{Bounds, RouteGeometry};
pub use travel_mode::{TravelMode, TravelModeSelector};
