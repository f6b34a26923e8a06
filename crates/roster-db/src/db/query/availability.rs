//! Query functions for staff availability.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::{staff_availability, staff_details};
use crate::model::availability::{
    NewStaffAvailability, StaffAvailability, StaffAvailabilityWithStaff,
};

/// ## Summary
/// Inserts availability for a staff member, or overwrites the existing row
/// for that staff member.
///
/// ## Returns
/// The stored row. Its ID is unchanged when an existing row was overwritten.
///
/// ## Errors
/// Returns a database error if the statement fails.
pub async fn upsert_availability(
    conn: &mut DbConnection<'_>,
    availability: &NewStaffAvailability,
) -> QueryResult<StaffAvailability> {
    diesel::insert_into(staff_availability::table)
        .values(availability)
        .on_conflict(staff_availability::staff_id)
        .do_update()
        .set(availability)
        .returning(StaffAvailability::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Lists availability joined with staff names. Rows whose staff member no
/// longer exists are omitted.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_with_staff(
    conn: &mut DbConnection<'_>,
) -> QueryResult<Vec<StaffAvailabilityWithStaff>> {
    let rows: Vec<(StaffAvailability, String, String)> = staff_availability::table
        .inner_join(staff_details::table)
        .order(staff_availability::id.asc())
        .select((
            StaffAvailability::as_select(),
            staff_details::first_name,
            staff_details::last_name,
        ))
        .load(conn)
        .await?;

    Ok(rows
        .into_iter()
        .map(
            |(availability, staff_first_name, staff_last_name)| StaffAvailabilityWithStaff {
                availability,
                staff_first_name,
                staff_last_name,
            },
        )
        .collect())
}

/// ## Summary
/// Replaces every field of an availability row by ID.
///
/// ## Returns
/// The updated row, or `None` if no row has the given ID.
///
/// ## Errors
/// Returns a database error if the update fails, including a unique violation
/// when `changes.staff_id` already has a different row.
pub async fn update_availability(
    conn: &mut DbConnection<'_>,
    id: i32,
    changes: &NewStaffAvailability,
) -> QueryResult<Option<StaffAvailability>> {
    diesel::update(staff_availability::table.find(id))
        .set(changes)
        .returning(StaffAvailability::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Summary
/// Deletes an availability row.
///
/// ## Returns
/// `true` if a row was deleted.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_availability(conn: &mut DbConnection<'_>, id: i32) -> QueryResult<bool> {
    let deleted = diesel::delete(staff_availability::table.find(id))
        .execute(conn)
        .await?;
    Ok(deleted > 0)
}
