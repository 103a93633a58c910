use gigboard_core::util::slug::with_suffix;
use gigboard_db::{
    db::{connection::DbConnection, query},
    depot_types::DepotUser,
    model::user::{NewUser, User, UserUniqueCriteria},
};

use super::identity::Identity;
use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Returns the caller's user, or `NotAuthenticated` for public callers.
///
/// Mutations call this before touching the database.
///
/// ## Errors
/// Returns `NotAuthenticated` if the caller is public.
pub fn require_user(caller: &DepotUser) -> ServiceResult<&User> {
    caller.user().ok_or(ServiceError::NotAuthenticated)
}

/// ## Summary
/// Resolves an identity to its stored user, creating the user on first sight.
///
/// ## Side Effects
/// Inserts a user row when the identity's subject is unknown.
///
/// ## Errors
/// Returns an error if the lookup or insert fails.
#[tracing::instrument(skip(conn, identity), fields(subject = %identity.subject))]
pub async fn resolve_user(conn: &mut DbConnection<'_>, identity: &Identity) -> ServiceResult<User> {
    let criteria = UserUniqueCriteria::TokenIdentifier(identity.subject.clone());

    if let Some(user) = query::user::find(conn, &criteria).await? {
        tracing::trace!(user_id = %user.id, "Identity already provisioned");
        return Ok(user);
    }

    match provision_user(conn, identity).await {
        Ok(user) => Ok(user),
        // A concurrent first request for the same subject won the insert.
        Err(ServiceError::DatabaseError(e)) if e.is_unique_violation() => {
            tracing::debug!("Lost provisioning race, re-reading user");
            query::user::find(conn, &criteria)
                .await?
                .ok_or(ServiceError::DatabaseError(e))
        }
        Err(e) => Err(e),
    }
}

/// ## Summary
/// Creates the user row for a new identity.
///
/// Takes the preferred username when free and otherwise appends a suffix
/// derived from the new user's id.
///
/// ## Errors
/// Returns an error if database queries or inserts fail.
async fn provision_user(conn: &mut DbConnection<'_>, identity: &Identity) -> ServiceResult<User> {
    let id = uuid::Uuid::now_v7();
    let preferred = identity.preferred_username();

    let username = if query::user::username_taken(conn, &preferred).await? {
        with_suffix(&preferred, id)
    } else {
        preferred
    };
    let name = identity.display_name();

    let new_user = NewUser {
        id,
        token_identifier: &identity.subject,
        username: &username,
        name: &name,
        email: identity.email.as_deref(),
    };

    let user = query::user::create(conn, &new_user).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User provisioned");

    Ok(user)
}
