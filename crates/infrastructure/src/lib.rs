//! Infrastructure layer - Adapters for external systems
//!
//! Implements the geocoding and routing ports over HTTP, loads the layered
//! application configuration and installs logging.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::AppConfig;
pub use telemetry::{TelemetryConfig, TelemetryError, init_logging};
