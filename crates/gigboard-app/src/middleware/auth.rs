use salvo::Depot;
use tracing::error;

use crate::error::{AppError, render_error};
use crate::{config::get_config_from_depot, db_handler::get_db_from_depot};
use gigboard_db::depot_types::DepotUser;
use gigboard_service::{
    auth::{depot::depot_keys, extract_identity, resolve_user},
    error::ServiceError,
};

/// ## Summary
/// Resolves the caller for every request under `/api` and stores it in the depot.
///
/// Requests without an identity are marked public and never touch the
/// database. Handlers decide whether a public caller is acceptable.
///
/// ## Side Effects
/// Inserts a `DepotUser` under `depot_keys::AUTHENTICATED_PRINCIPAL`, and
/// creates the user row the first time an identity is seen.
///
/// ## Errors
/// Responds with 503 when no database connection is available and 500 when
/// the request context is incomplete or the user cannot be resolved.
#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Authenticating request");

        if req.method() == salvo::http::Method::OPTIONS {
            depot.insert(depot_keys::AUTHENTICATED_PRINCIPAL, DepotUser::Public);
            return;
        }

        let config = match get_config_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = ?e, "Failed to get config from depot");
                halt(res, ctrl, &e);
                return;
            }
        };

        let identity = match extract_identity(req.headers(), &config) {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                tracing::debug!("No identity on request, treating as public");
                depot.insert(depot_keys::AUTHENTICATED_PRINCIPAL, DepotUser::Public);
                return;
            }
            Err(ServiceError::InvalidConfiguration(reason)) => {
                tracing::warn!(%reason, "Authentication misconfigured, treating as public");
                depot.insert(depot_keys::AUTHENTICATED_PRINCIPAL, DepotUser::Public);
                return;
            }
            Err(e) => {
                error!(error = ?e, "Failed to extract identity");
                halt(res, ctrl, &e.into());
                return;
            }
        };

        let provider = match get_db_from_depot(depot) {
            Ok(p) => p,
            Err(e) => {
                error!(error = ?e, "Failed to get database provider from depot");
                halt(res, ctrl, &e);
                return;
            }
        };

        let mut conn = match provider.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!(error = ?e, "Failed to get database connection");
                halt(res, ctrl, &e.into());
                return;
            }
        };

        match resolve_user(&mut conn, &identity).await {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, username = %user.username, "User authenticated");
                depot.insert(depot_keys::AUTHENTICATED_PRINCIPAL, DepotUser::User(user));
            }
            Err(e) => {
                error!(error = ?e, "Failed to resolve user for identity");
                halt(res, ctrl, &e.into());
            }
        }
    }
}

fn halt(res: &mut salvo::Response, ctrl: &mut salvo::FlowCtrl, err: &AppError) {
    render_error(res, err);
    ctrl.skip_rest();
}

/// ## Summary
/// Middleware handler for authentication.
/// Hoop this on a router so its handlers can read the caller from the depot.
pub struct AuthMiddleware;
