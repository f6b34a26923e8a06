//! Query functions for service user assignments.

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::{service_user_assignments, service_user_details, staff_details};
use crate::model::assignment::{Assignment, AssignmentWithNames, NewAssignment};

/// ## Summary
/// Returns a query to select all assignments.
#[must_use]
pub fn all() -> service_user_assignments::BoxedQuery<'static, diesel::pg::Pg> {
    service_user_assignments::table.into_boxed()
}

/// ## Summary
/// Returns a query to find assignments for a service user on a date.
#[must_use]
pub fn by_service_user_and_date(
    service_user_id: i32,
    date: NaiveDate,
) -> service_user_assignments::BoxedQuery<'static, diesel::pg::Pg> {
    all()
        .filter(service_user_assignments::service_user_id.eq(service_user_id))
        .filter(service_user_assignments::assignment_date.eq(date))
}

/// ## Summary
/// Finds an assignment that already occupies the service user's date.
///
/// Only the date is compared; start and end times play no part.
/// `exclude_id` skips one assignment, so an update does not conflict with itself.
///
/// ## Returns
/// The ID of the conflicting assignment, if any.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn find_date_conflict(
    conn: &mut DbConnection<'_>,
    service_user_id: i32,
    date: NaiveDate,
    exclude_id: Option<i32>,
) -> QueryResult<Option<i32>> {
    let mut query = by_service_user_and_date(service_user_id, date);
    if let Some(id) = exclude_id {
        query = query.filter(service_user_assignments::id.ne(id));
    }

    query
        .select(service_user_assignments::id)
        .first::<i32>(conn)
        .await
        .optional()
}

/// ## Summary
/// Inserts a new assignment and returns the inserted record.
///
/// ## Errors
/// Returns a database error if the insert fails.
pub async fn create_assignment(
    conn: &mut DbConnection<'_>,
    new_assignment: &NewAssignment,
) -> QueryResult<Assignment> {
    diesel::insert_into(service_user_assignments::table)
        .values(new_assignment)
        .returning(Assignment::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Retrieves an assignment by ID.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_assignment(
    conn: &mut DbConnection<'_>,
    id: i32,
) -> QueryResult<Option<Assignment>> {
    all()
        .filter(service_user_assignments::id.eq(id))
        .select(Assignment::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Lists assignments joined with staff and service user names, most recent
/// date first. Assignments referencing a deleted staff member or service user
/// are omitted.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_with_names(conn: &mut DbConnection<'_>) -> QueryResult<Vec<AssignmentWithNames>> {
    let rows: Vec<(Assignment, String, String, String, String)> = service_user_assignments::table
        .inner_join(staff_details::table)
        .inner_join(service_user_details::table)
        .order((
            service_user_assignments::assignment_date.desc(),
            service_user_assignments::start_time.asc(),
            service_user_assignments::id.asc(),
        ))
        .select((
            Assignment::as_select(),
            staff_details::first_name,
            staff_details::last_name,
            service_user_details::first_name,
            service_user_details::last_name,
        ))
        .load(conn)
        .await?;

    Ok(rows
        .into_iter()
        .map(
            |(assignment, staff_first_name, staff_last_name, user_first_name, user_last_name)| {
                AssignmentWithNames {
                    assignment,
                    staff_first_name,
                    staff_last_name,
                    user_first_name,
                    user_last_name,
                }
            },
        )
        .collect())
}

/// ## Summary
/// Replaces every field of an assignment by ID.
///
/// ## Returns
/// The updated record, or `None` if no row has the given ID.
///
/// ## Errors
/// Returns a database error if the update fails.
pub async fn update_assignment(
    conn: &mut DbConnection<'_>,
    id: i32,
    changes: &NewAssignment,
) -> QueryResult<Option<Assignment>> {
    diesel::update(service_user_assignments::table.find(id))
        .set(changes)
        .returning(Assignment::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Summary
/// Deletes an assignment.
///
/// ## Returns
/// `true` if a row was deleted.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_assignment(conn: &mut DbConnection<'_>, id: i32) -> QueryResult<bool> {
    let deleted = diesel::delete(service_user_assignments::table.find(id))
        .execute(conn)
        .await?;
    Ok(deleted > 0)
}
