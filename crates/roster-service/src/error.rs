use diesel::result::{DatabaseErrorKind, Error as DieselError};
use roster_core::error::CoreError;
use roster_db::error::DbError;
use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),

    #[error("Diesel error: {0}")]
    DieselError(DieselError),
}

impl ServiceError {
    /// ## Summary
    /// Builds a `NotFound` error for a record kind and ID, e.g. "Staff ID 4 does not exist".
    #[must_use]
    pub fn not_found(kind: &str, id: i32) -> Self {
        Self::NotFound(format!("{kind} ID {id} does not exist"))
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(msg) => Self::ValidationError(msg),
            CoreError::InvariantViolation(msg) => Self::InvariantViolation(msg),
        }
    }
}

impl From<DieselError> for ServiceError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
                Self::StoreUnavailable(info.message().to_string())
            }
            other => Self::DieselError(other),
        }
    }
}

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::DatabaseError(e) => e.into(),
            DbError::PoolError(e) => Self::StoreUnavailable(e.to_string()),
            DbError::MigrationError(msg) => Self::StoreUnavailable(msg),
            DbError::CoreError(e) => e.into(),
        }
    }
}

/// Returns whether a diesel error is a unique constraint violation.
#[must_use]
pub fn is_unique_violation(err: &DieselError) -> bool {
    matches!(
        err,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
