use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] gigboard_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] gigboard_core::error::CoreError),

    #[error("Unauthorized")]
    NotAuthenticated,

    #[error("{0}")]
    PreconditionFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Diesel error: {0}")]
    DieselError(#[from] diesel::result::Error),
}

impl ServiceError {
    /// Returns `true` if the error came from an exhausted or unreachable pool.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::DatabaseError(gigboard_db::error::DbError::PoolError(_))
        )
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
