//! Request extraction and the shared success payload.

use roster_core::types::RecordId;
use salvo::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Route parameter holding the record ID.
pub const ID_PARAM: &str = "id";

/// ## Summary
/// Success payload for writes: `{"message": "...", "id": N}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    pub id: RecordId,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: &str, id: RecordId) -> Self {
        Self {
            message: message.to_string(),
            id,
        }
    }
}

/// ## Summary
/// Parses a record ID from its textual form.
///
/// ## Errors
/// Returns `BadRequest` if the text is not an integer.
pub fn parse_record_id(raw: &str) -> AppResult<RecordId> {
    raw.trim()
        .parse::<RecordId>()
        .map_err(|_err| AppError::BadRequest(format!("Invalid record ID: {raw}")))
}

/// ## Summary
/// Reads the `{id}` path parameter.
///
/// ## Errors
/// Returns `BadRequest` if the parameter is missing or not an integer.
pub fn path_id(req: &Request) -> AppResult<RecordId> {
    let raw = req
        .param::<String>(ID_PARAM)
        .ok_or_else(|| AppError::BadRequest("Record ID required".to_string()))?;
    parse_record_id(&raw)
}

/// ## Summary
/// Parses the JSON request body.
///
/// ## Errors
/// Returns `BadRequest` if the body is missing or does not match `T`.
pub async fn json_body<T: DeserializeOwned>(req: &mut Request) -> AppResult<T> {
    req.parse_json::<T>().await.map_err(|e| {
        tracing::debug!(error = ?e, "Failed to parse request body");
        AppError::BadRequest(format!("Invalid request body: {e}"))
    })
}
