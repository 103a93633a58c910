use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::{connection::DbConnection, schema};
use crate::error::DbResult;
use crate::model::user::{NewUser, User, UserUniqueCriteria};

/// ## Summary
/// Finds a user by one of its unique keys.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn find(
    conn: &mut DbConnection<'_>,
    criteria: &UserUniqueCriteria,
) -> DbResult<Option<User>> {
    let user = match criteria {
        UserUniqueCriteria::Id(id) => {
            schema::user::table
                .filter(schema::user::id.eq(*id))
                .select(User::as_select())
                .first::<User>(conn)
                .await
        }
        UserUniqueCriteria::Username(username) => {
            schema::user::table
                .filter(schema::user::username.eq(username))
                .select(User::as_select())
                .first::<User>(conn)
                .await
        }
        UserUniqueCriteria::TokenIdentifier(token) => {
            schema::user::table
                .filter(schema::user::token_identifier.eq(token))
                .select(User::as_select())
                .first::<User>(conn)
                .await
        }
    };

    Ok(user.optional()?)
}

/// ## Summary
/// Returns `true` if a user already holds `username`.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn username_taken(conn: &mut DbConnection<'_>, username: &str) -> DbResult<bool> {
    let taken = diesel::select(diesel::dsl::exists(
        schema::user::table.filter(schema::user::username.eq(username)),
    ))
    .get_result::<bool>(conn)
    .await?;
    Ok(taken)
}

/// ## Summary
/// Inserts a user and returns the stored row.
///
/// ## Errors
/// Returns an error if the insert fails, including unique violations on
/// `username` or `token_identifier`.
pub async fn create(conn: &mut DbConnection<'_>, new_user: &NewUser<'_>) -> DbResult<User> {
    Ok(diesel::insert_into(schema::user::table)
        .values(new_user)
        .returning(User::as_select())
        .get_result::<User>(conn)
        .await?)
}
