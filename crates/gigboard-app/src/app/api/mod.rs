mod app_specific;

use salvo::Router;

use crate::middleware::auth::AuthMiddleware;

pub use gigboard_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, APP_ROUTE_COMPONENT, APP_ROUTE_PREFIX,
    SEED_ROUTE_COMPONENT, SEED_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the API router. Every route below it passes through
/// `AuthMiddleware`.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .hoop(AuthMiddleware)
        .push(app_specific::routes())
}
