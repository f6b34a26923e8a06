use roster_core::error::CoreError;
use roster_db::error::DbError;
use roster_service::error::ServiceError;
use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Response, Scribe};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] DbError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// ## Summary
    /// Maps the error to the HTTP status returned to the client.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::ServiceError(ServiceError::Conflict(_)) => StatusCode::CONFLICT,
            Self::ServiceError(ServiceError::ValidationError(_))
            | Self::CoreError(CoreError::ValidationError(_))
            | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ServiceError(_) | Self::DatabaseError(_) | Self::CoreError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// ## Summary
    /// Returns the message shown to the client. Client errors carry only the
    /// underlying message; server errors keep their category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ServiceError(
                ServiceError::NotFound(msg)
                | ServiceError::Conflict(msg)
                | ServiceError::ValidationError(msg),
            )
            | Self::CoreError(CoreError::ValidationError(msg))
            | Self::BadRequest(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl Scribe for AppError {
    fn render(self, res: &mut Response) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }

        res.status_code(status);
        res.render(Json(ErrorResponse {
            error: self.message(),
        }));
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
