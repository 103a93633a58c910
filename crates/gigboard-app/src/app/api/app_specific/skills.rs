use salvo::{Depot, Request, Response, Router, handler, writing::Json};

use gigboard_core::constants::USERS_ROUTE_COMPONENT;
use gigboard_service::skill::skills_for_username;

use crate::{
    db_handler::get_db_from_depot,
    error::{AppError, AppResult, render_error},
};

/// ## Summary
/// GET /api/app/users/{username}/skills - public skill list for a seller.
///
/// Unknown usernames answer with an empty list.
#[handler]
async fn user_skills(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(username) = req.param::<String>("username") else {
        render_error(res, &AppError::BadRequest("Missing username".to_string()));
        return;
    };

    let result: AppResult<_> = async {
        let provider = get_db_from_depot(depot)?;
        let mut conn = provider.get_connection().await?;
        Ok(skills_for_username(&mut conn, &username).await?)
    }
    .await;

    match result {
        Ok(skills) => res.render(Json(skills)),
        Err(e) => {
            tracing::error!(error = ?e, %username, "Failed to load skills");
            render_error(res, &e);
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(USERS_ROUTE_COMPONENT)
        .push(Router::with_path("{username}/skills").get(user_skills))
}
