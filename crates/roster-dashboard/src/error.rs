use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while talking to the roster server
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status. `message` is the
    /// server's own error text when it sent one.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Service user ID {0} has ended care and cannot be assigned")]
    NotEligible(i32),

    #[error("Service user ID {service_user_id} already has an assignment on {date}")]
    DateTaken {
        service_user_id: i32,
        date: NaiveDate,
    },
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
