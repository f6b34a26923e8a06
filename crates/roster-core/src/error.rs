use thiserror::Error;

/// Errors raised by the shared roster rules
#[derive(Error, Debug)]
pub enum CoreError {
    /// A submitted field breaks a record rule. Surfaces as a client error.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Wiring between layers is missing, e.g. an absent depot entry.
    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
