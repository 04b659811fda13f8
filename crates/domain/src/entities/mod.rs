//! Domain entities - Objects with a lifecycle in the suggestion and route flows

mod address_candidate;
mod address_query;
mod route_request;
mod route_result;

pub use address_candidate::AddressCandidate;
pub use address_query::AddressQuery;
pub use route_request::RouteRequestParams;
pub use route_result::{RouteResult, RouteSummary};
