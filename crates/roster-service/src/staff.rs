//! Staff record operations.

use roster_core::validate::{reject_blank, require_not_before, require_text};
use roster_db::db::connection::DbConnection;
use roster_db::db::query;
use roster_db::model::staff::{NewStaff, Staff};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Checks the fields of a staff submission.
///
/// ## Errors
/// Returns `ValidationError` if a required field is blank, contracted hours
/// are negative, or the leave date precedes the start date.
pub fn validate_staff(staff: &NewStaff) -> ServiceResult<()> {
    require_text("first_name", &staff.first_name)?;
    require_text("last_name", &staff.last_name)?;
    require_text("job_role", &staff.job_role)?;
    reject_blank("email", staff.email.as_deref())?;

    if let Some(hours) = staff.contracted_hours
        && !(hours.is_finite() && hours >= 0.0)
    {
        return Err(ServiceError::ValidationError(
            "contracted_hours must be a non-negative number".to_string(),
        ));
    }

    require_not_before(
        "start_date",
        staff.start_date.as_ref(),
        "leave_date",
        staff.leave_date.as_ref(),
    )?;

    Ok(())
}

/// ## Summary
/// Creates a staff member.
///
/// ## Errors
/// Returns `ValidationError` for invalid fields, or a store error.
#[tracing::instrument(skip(conn, new_staff), fields(job_role = %new_staff.job_role))]
pub async fn create_staff(conn: &mut DbConnection<'_>, new_staff: &NewStaff) -> ServiceResult<Staff> {
    validate_staff(new_staff)?;

    let created = query::staff::create_staff(conn, new_staff).await?;
    tracing::info!(staff_id = created.id, "Staff created");

    Ok(created)
}

/// ## Summary
/// Lists every staff member.
///
/// ## Errors
/// Returns a store error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list_staff(conn: &mut DbConnection<'_>) -> ServiceResult<Vec<Staff>> {
    Ok(query::staff::list_staff(conn).await?)
}

/// ## Summary
/// Fetches one staff member.
///
/// ## Errors
/// Returns `NotFound` if no staff member has the ID.
#[tracing::instrument(skip(conn))]
pub async fn get_staff(conn: &mut DbConnection<'_>, id: i32) -> ServiceResult<Staff> {
    query::staff::get_staff(conn, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Staff", id))
}

/// ## Summary
/// Replaces every field of a staff member.
///
/// ## Errors
/// Returns `ValidationError` for invalid fields and `NotFound` if no staff
/// member has the ID. Nothing is written in either case.
#[tracing::instrument(skip(conn, changes))]
pub async fn update_staff(
    conn: &mut DbConnection<'_>,
    id: i32,
    changes: &NewStaff,
) -> ServiceResult<Staff> {
    validate_staff(changes)?;

    let updated = query::staff::update_staff(conn, id, changes)
        .await?
        .ok_or_else(|| ServiceError::not_found("Staff", id))?;
    tracing::info!(staff_id = id, "Staff updated");

    Ok(updated)
}

/// ## Summary
/// Deletes a staff member. Their availability and assignments are kept.
///
/// ## Errors
/// Returns `NotFound` if no staff member has the ID.
#[tracing::instrument(skip(conn))]
pub async fn delete_staff(conn: &mut DbConnection<'_>, id: i32) -> ServiceResult<()> {
    if !query::staff::delete_staff(conn, id).await? {
        return Err(ServiceError::not_found("Staff", id));
    }
    tracing::info!(staff_id = id, "Staff deleted");

    Ok(())
}
