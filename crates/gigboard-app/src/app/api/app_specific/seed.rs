//! Seeding endpoints for the category taxonomy.
//!
//! Both endpoints take an empty JSON body and answer with
//! `{ "message": ..., "count": ... }`.

use salvo::{Depot, Response, Router, handler, writing::Json};

use gigboard_core::constants::{
    CATEGORIES_ROUTE_COMPONENT, SEED_ROUTE_COMPONENT, SUBCATEGORIES_ROUTE_COMPONENT,
};
use gigboard_db::depot_types::DepotUser;
use gigboard_service::{
    auth::{get_depot_user, require_user},
    seed::{CategorySeeder, SeedOutcome, SeedReport, SeedTarget, Seeder, SubcategorySeeder},
};

use crate::{
    catalog_handler::get_catalog_from_depot,
    db_handler::get_db_from_depot,
    error::{AppResult, render_error},
};

/// ## Summary
/// Runs the seeder for `target` as `caller`.
///
/// The caller is checked before the catalog or a connection is fetched, so a
/// public request is refused without touching the database.
///
/// ## Errors
/// `NotAuthenticated` for public callers, `PreconditionFailed` when seeding
/// subcategories before categories, or the underlying database error.
async fn run_seeder(
    depot: &Depot,
    caller: &DepotUser,
    target: SeedTarget,
) -> AppResult<SeedOutcome> {
    require_user(caller)?;

    let catalog = get_catalog_from_depot(depot)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let outcome = match target {
        SeedTarget::Categories => CategorySeeder::new(&catalog).seed(&mut conn, caller).await?,
        SeedTarget::Subcategories => {
            SubcategorySeeder::new(&catalog)
                .seed(&mut conn, caller)
                .await?
        }
    };

    Ok(outcome)
}

async fn respond(depot: &Depot, res: &mut Response, target: SeedTarget) {
    let caller = get_depot_user(depot);

    match run_seeder(depot, &caller, target).await {
        Ok(outcome) => {
            tracing::info!(
                seed = target.label(),
                status = ?outcome.status,
                count = outcome.count,
                "Seeding finished"
            );
            res.render(Json(SeedReport::from(outcome)));
        }
        Err(e) => {
            if e.status_code().is_server_error() {
                tracing::error!(error = ?e, seed = target.label(), "Seeding failed");
            } else {
                tracing::debug!(error = %e, seed = target.label(), "Seeding refused");
            }
            render_error(res, &e);
        }
    }
}

/// ## Summary
/// POST /api/app/seed/categories - insert the catalog categories once.
#[handler]
async fn seed_categories(depot: &mut Depot, res: &mut Response) {
    respond(depot, res, SeedTarget::Categories).await;
}

/// ## Summary
/// POST /api/app/seed/subcategories - replace all subcategories with the
/// catalog snapshot for the stored categories.
#[handler]
async fn seed_subcategories(depot: &mut Depot, res: &mut Response) {
    respond(depot, res, SeedTarget::Subcategories).await;
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(SEED_ROUTE_COMPONENT)
        .push(Router::with_path(CATEGORIES_ROUTE_COMPONENT).post(seed_categories))
        .push(Router::with_path(SUBCATEGORIES_ROUTE_COMPONENT).post(seed_subcategories))
}
