//! Service user record operations.

use roster_core::validate::{reject_blank, require_not_before, require_text};
use roster_db::db::connection::DbConnection;
use roster_db::db::query;
use roster_db::model::service_user::{NewServiceUser, ServiceUser};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Checks the fields of a service user submission.
///
/// ## Errors
/// Returns `ValidationError` if a required field is blank or the end date
/// precedes the start date.
pub fn validate_service_user(user: &NewServiceUser) -> ServiceResult<()> {
    require_text("unique_reference_code", &user.unique_reference_code)?;
    require_text("first_name", &user.first_name)?;
    require_text("last_name", &user.last_name)?;
    require_text("gender", &user.gender)?;
    reject_blank("rag_rating", user.rag_rating.as_deref())?;
    require_not_before(
        "start_date",
        user.start_date.as_ref(),
        "end_date",
        user.end_date.as_ref(),
    )?;

    Ok(())
}

/// Logs when a reference code is already held by another service user. The
/// code is only logically unique, so the write goes ahead either way, and a
/// failed lookup is logged rather than returned.
async fn warn_on_shared_reference(
    conn: &mut DbConnection<'_>,
    code: &str,
    exclude_id: Option<i32>,
) {
    match query::service_user::count_by_reference_code(conn, code, exclude_id).await {
        Ok(0) => {}
        Ok(existing) => tracing::warn!(
            reference_code = code,
            existing,
            "Reference code is already used by another service user"
        ),
        Err(e) => tracing::warn!(
            error = ?e,
            reference_code = code,
            "Could not check reference code usage"
        ),
    }
}

/// ## Summary
/// Creates a service user.
///
/// ## Errors
/// Returns `ValidationError` for invalid fields, or a store error.
#[tracing::instrument(skip(conn, new_user), fields(reference_code = %new_user.unique_reference_code))]
pub async fn create_service_user(
    conn: &mut DbConnection<'_>,
    new_user: &NewServiceUser,
) -> ServiceResult<ServiceUser> {
    validate_service_user(new_user)?;
    warn_on_shared_reference(conn, &new_user.unique_reference_code, None).await;

    let created = query::service_user::create_service_user(conn, new_user).await?;
    tracing::info!(service_user_id = created.id, "Service user created");

    Ok(created)
}

/// ## Summary
/// Lists every service user.
///
/// ## Errors
/// Returns a store error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list_service_users(conn: &mut DbConnection<'_>) -> ServiceResult<Vec<ServiceUser>> {
    Ok(query::service_user::list_service_users(conn).await?)
}

/// ## Summary
/// Fetches one service user.
///
/// ## Errors
/// Returns `NotFound` if no service user has the ID.
#[tracing::instrument(skip(conn))]
pub async fn get_service_user(conn: &mut DbConnection<'_>, id: i32) -> ServiceResult<ServiceUser> {
    query::service_user::get_service_user(conn, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Service user", id))
}

/// ## Summary
/// Replaces every field of a service user.
///
/// ## Errors
/// Returns `ValidationError` for invalid fields and `NotFound` if no service
/// user has the ID.
#[tracing::instrument(skip(conn, changes))]
pub async fn update_service_user(
    conn: &mut DbConnection<'_>,
    id: i32,
    changes: &NewServiceUser,
) -> ServiceResult<ServiceUser> {
    validate_service_user(changes)?;
    warn_on_shared_reference(conn, &changes.unique_reference_code, Some(id)).await;

    let updated = query::service_user::update_service_user(conn, id, changes)
        .await?
        .ok_or_else(|| ServiceError::not_found("Service user", id))?;
    tracing::info!(service_user_id = id, "Service user updated");

    Ok(updated)
}

/// ## Summary
/// Deletes a service user. Their assignments and needs are kept.
///
/// ## Errors
/// Returns `NotFound` if no service user has the ID.
#[tracing::instrument(skip(conn))]
pub async fn delete_service_user(conn: &mut DbConnection<'_>, id: i32) -> ServiceResult<()> {
    if !query::service_user::delete_service_user(conn, id).await? {
        return Err(ServiceError::not_found("Service user", id));
    }
    tracing::info!(service_user_id = id, "Service user deleted");

    Ok(())
}
