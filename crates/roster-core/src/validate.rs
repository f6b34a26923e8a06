//! Field validation helpers shared by the record operations.

use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Fails when a required text field is empty or whitespace only.
///
/// ## Errors
/// Returns `CoreError::ValidationError` naming the field.
pub fn require_text(field: &str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::ValidationError(format!("{field} is required")));
    }
    Ok(())
}

/// ## Summary
/// Fails when an optional text field is present but blank.
///
/// ## Errors
/// Returns `CoreError::ValidationError` naming the field.
pub fn reject_blank(field: &str, value: Option<&str>) -> CoreResult<()> {
    match value {
        Some(v) if v.trim().is_empty() => Err(CoreError::ValidationError(format!(
            "{field} must not be blank when provided"
        ))),
        _ => Ok(()),
    }
}

/// ## Summary
/// Fails when both bounds are present and `end` is earlier than `start`.
/// Equal bounds are accepted.
///
/// ## Errors
/// Returns `CoreError::ValidationError` naming both fields.
pub fn require_not_before<T: PartialOrd>(
    start_field: &str,
    start: Option<&T>,
    end_field: &str,
    end: Option<&T>,
) -> CoreResult<()> {
    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        return Err(CoreError::ValidationError(format!(
            "{end_field} must not be before {start_field}"
        )));
    }
    Ok(())
}

/// ## Summary
/// Fails when both bounds are present and `end` is not strictly after `start`.
///
/// ## Errors
/// Returns `CoreError::ValidationError` naming both fields.
pub fn require_after<T: PartialOrd>(
    start_field: &str,
    start: Option<&T>,
    end_field: &str,
    end: Option<&T>,
) -> CoreResult<()> {
    if let (Some(start), Some(end)) = (start, end)
        && end <= start
    {
        return Err(CoreError::ValidationError(format!(
            "{end_field} must be after {start_field}"
        )));
    }
    Ok(())
}

/// ## Summary
/// Fails when `start` and `end` are the same. An `end` earlier than `start`
/// is accepted and read as running past midnight.
///
/// ## Errors
/// Returns `CoreError::ValidationError` naming both fields.
pub fn require_distinct<T: PartialEq>(
    start_field: &str,
    start: &T,
    end_field: &str,
    end: &T,
) -> CoreResult<()> {
    if start == end {
        return Err(CoreError::ValidationError(format!(
            "{end_field} must differ from {start_field}"
        )));
    }
    Ok(())
}
