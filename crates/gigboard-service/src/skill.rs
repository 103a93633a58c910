//! Public skill lookup for seller profiles.

use gigboard_db::{
    db::{connection::DbConnection, query},
    model::{skill::Skill, user::UserUniqueCriteria},
};

use crate::error::ServiceResult;

/// ## Summary
/// Returns the skills of the user with `username`.
///
/// An unknown username yields an empty list rather than an error, so public
/// profile pages render for users that have not been provisioned yet.
///
/// ## Errors
/// Returns an error only if a database query fails.
#[tracing::instrument(skip(conn))]
pub async fn skills_for_username(
    conn: &mut DbConnection<'_>,
    username: &str,
) -> ServiceResult<Vec<Skill>> {
    let criteria = UserUniqueCriteria::Username(username.to_string());

    let Some(user) = query::user::find(conn, &criteria).await? else {
        tracing::debug!("No user with this username; returning no skills");
        return Ok(Vec::new());
    };

    let skills = query::skill::list_for_user(conn, user.id).await?;
    tracing::trace!(user_id = %user.id, count = skills.len(), "Loaded skills");

    Ok(skills)
}
