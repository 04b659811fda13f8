//! Application layer - Controllers and orchestration
//!
//! Holds the address-suggestion and route-request controllers together with
//! the port definitions they drive. Adapters in the infrastructure layer
//! implement the ports.

pub mod error;
pub mod ports;
pub mod services;
#[cfg(test)]
pub(crate) mod testing;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
