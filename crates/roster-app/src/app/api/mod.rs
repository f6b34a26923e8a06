mod assignments;
mod availability;
mod healthcheck;
mod needs;
mod request;
mod service_users;
mod staff;

use salvo::Router;

pub use request::MessageResponse;
// Re-export route constants from core
pub use roster_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, ASSIGNMENTS_ROUTE_PREFIX, AVAILABILITY_ROUTE_PREFIX,
    NEEDS_ROUTE_PREFIX, SERVICE_USERS_ROUTE_PREFIX, STAFF_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the API router with every record handler.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(healthcheck::routes())
        .push(staff::routes())
        .push(service_users::routes())
        .push(availability::routes())
        .push(assignments::routes())
        .push(needs::routes())
}
