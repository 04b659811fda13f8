//! Address autocomplete for Route Finder
//!
//! Searches free-text addresses with the [Photon](https://photon.komoot.io)
//! geocoder (OpenStreetMap data) and returns ranked places.
//!
//! # Architecture
//!
//! [`GeocodingClient`] defines the search interface, implemented by
//! [`PhotonGeocodingClient`]. Results are cached per query with a short TTL.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, PhotonConfig, PhotonGeocodingClient};
//!
//! let client = PhotonGeocodingClient::new(&PhotonConfig::default())?;
//! let places = client.search("Piazza Vecchia Bergamo", 5).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, PhotonGeocodingClient};
pub use config::PhotonConfig;
pub use error::GeocodingError;
pub use models::Place;
