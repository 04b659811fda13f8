//! Route computation for Route Finder
//!
//! Talks to the `routejson` back end, which geocodes two free-text addresses
//! and proxies an [openrouteservice](https://openrouteservice.org) directions
//! request. Both response shapes the back end can relay are understood: a
//! GeoJSON feature collection, and a directions document whose geometry is an
//! encoded polyline.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::TravelMode;
//! use integration_routing::{HttpRouteClient, RouteClient, RoutingConfig};
//!
//! let client = HttpRouteClient::new(&RoutingConfig::default())?;
//! let route = client.route("Bergamo", "Milano", TravelMode::Car).await?;
//! println!("{} m", route.distance_meters);
//! ```

mod client;
mod config;
mod error;
mod models;
pub mod polyline;

pub use client::{HttpRouteClient, RouteClient};
pub use config::RoutingConfig;
pub use error::RoutingError;
pub use models::RouteResponse;
