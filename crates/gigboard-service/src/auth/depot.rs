//! Depot helpers for extracting the caller from Salvo requests.

use gigboard_db::depot_types::DepotUser;

pub mod depot_keys {
    pub const AUTHENTICATED_PRINCIPAL: &str = "__authenticated_principal";
}

/// Get the caller stored by the authentication middleware.
///
/// A depot without a caller is treated as public.
#[must_use]
pub fn get_depot_user(depot: &salvo::Depot) -> DepotUser {
    match depot.get::<DepotUser>(depot_keys::AUTHENTICATED_PRINCIPAL) {
        Ok(user) => user.clone(),
        Err(_missing) => {
            tracing::warn!("Depot missing user context; defaulting to public");
            DepotUser::Public
        }
    }
}
