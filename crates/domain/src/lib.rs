//! Domain layer for Route Finder
//!
//! Contains the address-suggestion and route value objects, the entities that
//! flow between the controllers, and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
