//! Request-scoped types shared between the service and HTTP crates.
use crate::model::user::User;

/// Represents an authenticated user or public access in the depot.
#[derive(Debug, Clone)]
pub enum DepotUser {
    /// Authenticated user
    User(User),
    /// Unauthenticated/public access
    Public,
}

impl DepotUser {
    /// Returns the user if the request is authenticated.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::User(user) => Some(user),
            Self::Public => None,
        }
    }
}
