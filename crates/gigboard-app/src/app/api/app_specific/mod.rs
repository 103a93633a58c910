use salvo::Router;

use gigboard_core::constants::APP_ROUTE_COMPONENT;

mod healthcheck;
mod seed;
mod skills;
mod taxonomy;
mod whoami;


#[must_use]
pub fn routes() -> Router {
    Router::with_path(APP_ROUTE_COMPONENT)
        .push(healthcheck::routes())
        .push(whoami::routes())
        .push(seed::routes())
        .push(taxonomy::routes())
        .push(skills::routes())
}
