use roster_core::constants::HEALTHCHECK_ROUTE_COMPONENT;
use salvo::{Router, handler};

#[handler]
async fn healthcheck() -> &'static str {
    "OK"
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(HEALTHCHECK_ROUTE_COMPONENT).get(healthcheck)
}
