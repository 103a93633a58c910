use salvo::prelude::Json;
use salvo::{Depot, Router, handler};
use serde_json::json;

use gigboard_db::depot_types::DepotUser;
use gigboard_service::auth::get_depot_user;

/// ## Summary
/// Returns the caller resolved by `AuthMiddleware`, or `{"status":"public"}`.
#[handler]
async fn whoami(depot: &Depot) -> Json<serde_json::Value> {
    match get_depot_user(depot) {
        DepotUser::User(user) => Json(serde_json::to_value(user).unwrap_or(json!(null))),
        DepotUser::Public => Json(json!({"status":"public"})),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("whoami").get(whoami)
}
