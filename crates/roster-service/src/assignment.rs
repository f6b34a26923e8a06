//! Assignment operations and the one-visit-per-day rule.
//!
//! A service user may have at most one assignment per calendar date. The rule
//! compares dates only: two visits on the same day are rejected even when
//! their time ranges do not overlap.
//!
//! Every write runs the checks in a fixed order inside one transaction:
//! staff exists, service user exists, date is free, then the write itself.
//! Any failure rolls the whole unit back.
//!
//! An end time earlier than the start time is a visit that runs past
//! midnight; it still belongs to `assignment_date`.

use diesel_async::scoped_futures::ScopedFutureExt;
use roster_core::validate::require_distinct;
use roster_db::db::connection::DbConnection;
use roster_db::db::query;
use roster_db::db::transaction::with_transaction;
use roster_db::model::assignment::{Assignment, AssignmentWithNames, NewAssignment};

use crate::error::{ServiceError, ServiceResult, is_unique_violation};

/// ## Summary
/// Checks the fields of an assignment submission.
///
/// ## Errors
/// Returns `ValidationError` if the start and end times are equal.
pub fn validate_assignment(assignment: &NewAssignment) -> ServiceResult<()> {
    require_distinct(
        "start_time",
        &assignment.start_time,
        "end_time",
        &assignment.end_time,
    )?;
    Ok(())
}

fn date_taken(assignment: &NewAssignment) -> ServiceError {
    ServiceError::Conflict(format!(
        "Service user ID {} already has an assignment on {}",
        assignment.service_user_id, assignment.assignment_date
    ))
}

/// Verifies that both referenced records exist, staff first.
async fn ensure_references(
    conn: &mut DbConnection<'_>,
    assignment: &NewAssignment,
) -> ServiceResult<()> {
    if !query::staff::exists(conn, assignment.staff_id).await? {
        return Err(ServiceError::not_found("Staff", assignment.staff_id));
    }
    if !query::service_user::exists(conn, assignment.service_user_id).await? {
        return Err(ServiceError::not_found(
            "Service user",
            assignment.service_user_id,
        ));
    }
    Ok(())
}

/// ## Summary
/// Creates an assignment.
///
/// ## Side Effects
/// Inserts one row on success. Nothing is written on any failure.
///
/// ## Errors
/// - `ValidationError` if the start and end times are equal
/// - `NotFound` if the staff member or service user does not exist
/// - `Conflict` if the service user already has an assignment on that date
#[tracing::instrument(
    skip(conn, new_assignment),
    fields(
        staff_id = new_assignment.staff_id,
        service_user_id = new_assignment.service_user_id,
        date = %new_assignment.assignment_date,
    )
)]
pub async fn create_assignment(
    conn: &mut DbConnection<'_>,
    new_assignment: &NewAssignment,
) -> ServiceResult<Assignment> {
    validate_assignment(new_assignment)?;

    let new_assignment = new_assignment.clone();
    let created = with_transaction(conn, move |tx| {
        async move {
            ensure_references(tx, &new_assignment).await?;

            if let Some(existing_id) = query::assignment::find_date_conflict(
                tx,
                new_assignment.service_user_id,
                new_assignment.assignment_date,
                None,
            )
            .await?
            {
                tracing::debug!(existing_id, "Assignment date already taken");
                return Err(date_taken(&new_assignment));
            }

            query::assignment::create_assignment(tx, &new_assignment)
                .await
                .map_err(|e| {
                    if is_unique_violation(&e) {
                        date_taken(&new_assignment)
                    } else {
                        e.into()
                    }
                })
        }
        .scope_boxed()
    })
    .await?;

    tracing::info!(assignment_id = created.id, "Assignment created");

    Ok(created)
}

/// ## Summary
/// Replaces every field of an assignment, applying the same checks as creation.
/// The assignment being updated does not conflict with itself.
///
/// ## Errors
/// - `ValidationError` if the start and end times are equal
/// - `NotFound` if the assignment, staff member or service user does not exist
/// - `Conflict` if another assignment holds the service user's date
#[tracing::instrument(skip(conn, changes))]
pub async fn update_assignment(
    conn: &mut DbConnection<'_>,
    id: i32,
    changes: &NewAssignment,
) -> ServiceResult<Assignment> {
    validate_assignment(changes)?;

    let changes = changes.clone();
    let updated = with_transaction(conn, move |tx| {
        async move {
            if query::assignment::get_assignment(tx, id).await?.is_none() {
                return Err(ServiceError::not_found("Assignment", id));
            }

            ensure_references(tx, &changes).await?;

            if query::assignment::find_date_conflict(
                tx,
                changes.service_user_id,
                changes.assignment_date,
                Some(id),
            )
            .await?
            .is_some()
            {
                return Err(date_taken(&changes));
            }

            match query::assignment::update_assignment(tx, id, &changes).await {
                Ok(Some(updated)) => Ok(updated),
                Ok(None) => Err(ServiceError::not_found("Assignment", id)),
                Err(e) if is_unique_violation(&e) => Err(date_taken(&changes)),
                Err(e) => Err(e.into()),
            }
        }
        .scope_boxed()
    })
    .await?;

    tracing::info!(assignment_id = id, "Assignment updated");

    Ok(updated)
}

/// ## Summary
/// Lists assignments with staff and service user names, most recent date first.
///
/// ## Errors
/// Returns a store error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list_assignments(
    conn: &mut DbConnection<'_>,
) -> ServiceResult<Vec<AssignmentWithNames>> {
    Ok(query::assignment::list_with_names(conn).await?)
}

/// ## Summary
/// Deletes an assignment.
///
/// ## Errors
/// Returns `NotFound` if no assignment has the ID.
#[tracing::instrument(skip(conn))]
pub async fn delete_assignment(conn: &mut DbConnection<'_>, id: i32) -> ServiceResult<()> {
    if !query::assignment::delete_assignment(conn, id).await? {
        return Err(ServiceError::not_found("Assignment", id));
    }
    tracing::info!(assignment_id = id, "Assignment deleted");

    Ok(())
}
