//! Staff availability operations. Each staff member has at most one row.

use roster_core::validate::require_after;
use roster_db::db::connection::DbConnection;
use roster_db::db::query;
use roster_db::model::availability::{
    NewStaffAvailability, StaffAvailability, StaffAvailabilityWithStaff,
};

use crate::error::{ServiceError, ServiceResult, is_unique_violation};

/// ## Summary
/// Checks an availability submission.
///
/// ## Errors
/// Returns `ValidationError` if both times are given and the end time is not
/// after the start time.
pub fn validate_availability(availability: &NewStaffAvailability) -> ServiceResult<()> {
    require_after(
        "start_time",
        availability.start_time.as_ref(),
        "end_time",
        availability.end_time.as_ref(),
    )?;
    Ok(())
}

async fn ensure_staff(conn: &mut DbConnection<'_>, staff_id: i32) -> ServiceResult<()> {
    if query::staff::exists(conn, staff_id).await? {
        Ok(())
    } else {
        Err(ServiceError::not_found("Staff", staff_id))
    }
}

/// ## Summary
/// Stores availability for a staff member, replacing any row they already have.
///
/// ## Side Effects
/// Inserts a row, or overwrites the staff member's existing row in place.
///
/// ## Errors
/// Returns `ValidationError` for an invalid time range and `NotFound` if the
/// staff member does not exist.
#[tracing::instrument(skip(conn, availability), fields(staff_id = availability.staff_id))]
pub async fn upsert_availability(
    conn: &mut DbConnection<'_>,
    availability: &NewStaffAvailability,
) -> ServiceResult<StaffAvailability> {
    validate_availability(availability)?;
    ensure_staff(conn, availability.staff_id).await?;

    let stored = query::availability::upsert_availability(conn, availability).await?;
    tracing::info!(
        availability_id = stored.id,
        days = %stored.days().summary(),
        "Availability stored"
    );

    Ok(stored)
}

/// ## Summary
/// Lists availability with staff names.
///
/// ## Errors
/// Returns a store error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list_availability(
    conn: &mut DbConnection<'_>,
) -> ServiceResult<Vec<StaffAvailabilityWithStaff>> {
    Ok(query::availability::list_with_staff(conn).await?)
}

/// ## Summary
/// Replaces every field of an availability row by ID.
///
/// ## Errors
/// - `ValidationError` for an invalid time range
/// - `NotFound` if the row or the referenced staff member does not exist
/// - `Conflict` if the staff member already has a different row
#[tracing::instrument(skip(conn, changes))]
pub async fn update_availability(
    conn: &mut DbConnection<'_>,
    id: i32,
    changes: &NewStaffAvailability,
) -> ServiceResult<StaffAvailability> {
    validate_availability(changes)?;
    ensure_staff(conn, changes.staff_id).await?;

    let updated = match query::availability::update_availability(conn, id, changes).await {
        Ok(Some(updated)) => updated,
        Ok(None) => return Err(ServiceError::not_found("Staff availability", id)),
        Err(e) if is_unique_violation(&e) => {
            return Err(ServiceError::Conflict(format!(
                "Staff ID {} already has availability recorded",
                changes.staff_id
            )));
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(availability_id = id, "Availability updated");

    Ok(updated)
}

/// ## Summary
/// Deletes an availability row.
///
/// ## Errors
/// Returns `NotFound` if no row has the ID.
#[tracing::instrument(skip(conn))]
pub async fn delete_availability(conn: &mut DbConnection<'_>, id: i32) -> ServiceResult<()> {
    if !query::availability::delete_availability(conn, id).await? {
        return Err(ServiceError::not_found("Staff availability", id));
    }
    tracing::info!(availability_id = id, "Availability deleted");

    Ok(())
}
