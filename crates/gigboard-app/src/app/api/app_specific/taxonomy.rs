use salvo::{Depot, Request, Response, Router, handler, writing::Json};

use gigboard_core::constants::{CATEGORIES_ROUTE_COMPONENT, SUBCATEGORIES_ROUTE_COMPONENT};
use gigboard_service::taxonomy::{list_categories, list_subcategories};

use crate::{
    db_handler::get_db_from_depot,
    error::{AppError, AppResult, render_error},
};

/// Parses the optional `category_id` query parameter.
fn category_filter(req: &Request) -> AppResult<Option<uuid::Uuid>> {
    req.query::<String>("category_id")
        .map(|raw| {
            uuid::Uuid::parse_str(raw.trim())
                .map_err(|_err| AppError::BadRequest("Invalid category_id".to_string()))
        })
        .transpose()
}

/// ## Summary
/// GET /api/app/categories - every category ordered by name.
#[handler]
async fn categories(depot: &mut Depot, res: &mut Response) {
    let result: AppResult<_> = async {
        let provider = get_db_from_depot(depot)?;
        let mut conn = provider.get_connection().await?;
        Ok(list_categories(&mut conn).await?)
    }
    .await;

    match result {
        Ok(rows) => res.render(Json(rows)),
        Err(e) => {
            tracing::error!(error = ?e, "Failed to list categories");
            render_error(res, &e);
        }
    }
}

/// ## Summary
/// GET /api/app/subcategories - subcategories, optionally of one category.
#[handler]
async fn subcategories(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let category_id = match category_filter(req) {
        Ok(id) => id,
        Err(e) => {
            render_error(res, &e);
            return;
        }
    };

    let result: AppResult<_> = async {
        let provider = get_db_from_depot(depot)?;
        let mut conn = provider.get_connection().await?;
        Ok(list_subcategories(&mut conn, category_id).await?)
    }
    .await;

    match result {
        Ok(rows) => res.render(Json(rows)),
        Err(e) => {
            tracing::error!(error = ?e, ?category_id, "Failed to list subcategories");
            render_error(res, &e);
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(Router::with_path(CATEGORIES_ROUTE_COMPONENT).get(categories))
        .push(Router::with_path(SUBCATEGORIES_ROUTE_COMPONENT).get(subcategories))
}
