//! Application services - Controllers and their building blocks

mod debouncer;
mod route_controller;
mod sequence_tracker;
mod suggestion_controller;

pub use debouncer::Debouncer;
pub use route_controller::{RouteControllerState, RouteOutcome, RouteRequestController};
pub use sequence_tracker::SequenceTracker;
pub use suggestion_controller::{
    AddressSuggestionController, SuggestionConfig, SuggestionOutcome,
};
