//! Service user care need operations.

use roster_core::validate::require_text;
use roster_db::db::connection::DbConnection;
use roster_db::db::query;
use roster_db::model::need::{NewServiceUserNeed, ServiceUserNeed, ServiceUserNeedWithUser};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Checks a need submission.
///
/// ## Errors
/// Returns `ValidationError` if the care type is blank or the duration is not
/// a positive number of minutes.
pub fn validate_need(need: &NewServiceUserNeed) -> ServiceResult<()> {
    require_text("care_type", &need.care_type)?;

    if let Some(minutes) = need.duration_minutes
        && minutes <= 0
    {
        return Err(ServiceError::ValidationError(
            "duration_minutes must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

async fn ensure_service_user(conn: &mut DbConnection<'_>, id: i32) -> ServiceResult<()> {
    if query::service_user::exists(conn, id).await? {
        Ok(())
    } else {
        Err(ServiceError::not_found("Service user", id))
    }
}

/// ## Summary
/// Records a care need for a service user.
///
/// ## Errors
/// Returns `ValidationError` for invalid fields and `NotFound` if the service
/// user does not exist.
#[tracing::instrument(skip(conn, new_need), fields(service_user_id = new_need.service_user_id))]
pub async fn create_need(
    conn: &mut DbConnection<'_>,
    new_need: &NewServiceUserNeed,
) -> ServiceResult<ServiceUserNeed> {
    validate_need(new_need)?;
    ensure_service_user(conn, new_need.service_user_id).await?;

    let created = query::need::create_need(conn, new_need).await?;
    tracing::info!(need_id = created.id, care_type = %created.care_type, "Need created");

    Ok(created)
}

/// ## Summary
/// Lists every need with the service user's name.
///
/// ## Errors
/// Returns a store error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list_needs(conn: &mut DbConnection<'_>) -> ServiceResult<Vec<ServiceUserNeedWithUser>> {
    Ok(query::need::list_with_service_user(conn).await?)
}

/// ## Summary
/// Lists the needs of one service user.
///
/// ## Errors
/// Returns `NotFound` if the service user does not exist.
#[tracing::instrument(skip(conn))]
pub async fn list_needs_for_service_user(
    conn: &mut DbConnection<'_>,
    service_user_id: i32,
) -> ServiceResult<Vec<ServiceUserNeed>> {
    ensure_service_user(conn, service_user_id).await?;
    Ok(query::need::list_for_service_user(conn, service_user_id).await?)
}

/// ## Summary
/// Replaces every field of a need.
///
/// ## Errors
/// Returns `ValidationError` for invalid fields and `NotFound` if the need or
/// the referenced service user does not exist.
#[tracing::instrument(skip(conn, changes))]
pub async fn update_need(
    conn: &mut DbConnection<'_>,
    id: i32,
    changes: &NewServiceUserNeed,
) -> ServiceResult<ServiceUserNeed> {
    validate_need(changes)?;
    ensure_service_user(conn, changes.service_user_id).await?;

    let updated = query::need::update_need(conn, id, changes)
        .await?
        .ok_or_else(|| ServiceError::not_found("Need", id))?;
    tracing::info!(need_id = id, "Need updated");

    Ok(updated)
}

/// ## Summary
/// Deletes a need.
///
/// ## Errors
/// Returns `NotFound` if no need has the ID.
#[tracing::instrument(skip(conn))]
pub async fn delete_need(conn: &mut DbConnection<'_>, id: i32) -> ServiceResult<()> {
    if !query::need::delete_need(conn, id).await? {
        return Err(ServiceError::not_found("Need", id));
    }
    tracing::info!(need_id = id, "Need deleted");

    Ok(())
}
