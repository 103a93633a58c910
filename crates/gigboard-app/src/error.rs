use salvo::http::StatusCode;
use salvo::writing::Json;
use serde::Serialize;
use thiserror::Error;

use gigboard_db::error::DbError;
use gigboard_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] DbError),

    #[error(transparent)]
    CoreError(#[from] gigboard_core::error::CoreError),

    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// HTTP status reported for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(ServiceError::NotAuthenticated) => StatusCode::UNAUTHORIZED,
            Self::ServiceError(ServiceError::PreconditionFailed(_)) => {
                StatusCode::PRECONDITION_FAILED
            }
            Self::ServiceError(e) if e.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
            Self::DatabaseError(DbError::PoolError(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ServiceError(_) | Self::DatabaseError(_) | Self::CoreError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to the client. Server-side failures are not
    /// described beyond their status.
    #[must_use]
    pub fn client_message(&self) -> String {
        let status = self.status_code();
        if status.is_server_error() {
            status
                .canonical_reason()
                .unwrap_or("Internal Server Error")
                .to_string()
        } else {
            self.to_string()
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Writes `err` to the response as a JSON error body with its status code.
pub fn render_error(res: &mut salvo::Response, err: &AppError) {
    res.status_code(err.status_code());
    res.render(Json(ErrorResponse {
        error: err.client_message(),
    }));
}
