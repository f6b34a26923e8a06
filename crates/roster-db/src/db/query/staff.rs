//! Query functions for staff records.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::staff_details;
use crate::model::staff::{NewStaff, Staff};

/// ## Summary
/// Returns a query to select all staff.
#[must_use]
pub fn all() -> staff_details::BoxedQuery<'static, diesel::pg::Pg> {
    staff_details::table.into_boxed()
}

/// ## Summary
/// Returns a query to find a staff member by ID.
#[must_use]
pub fn by_id(id: i32) -> staff_details::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(staff_details::id.eq(id))
}

/// ## Summary
/// Checks whether a staff member with the given ID exists.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn exists(conn: &mut DbConnection<'_>, id: i32) -> QueryResult<bool> {
    diesel::select(diesel::dsl::exists(staff_details::table.find(id)))
        .get_result(conn)
        .await
}

/// ## Summary
/// Inserts a new staff member and returns the inserted record.
///
/// ## Errors
/// Returns a database error if the insert fails.
pub async fn create_staff(conn: &mut DbConnection<'_>, new_staff: &NewStaff) -> QueryResult<Staff> {
    diesel::insert_into(staff_details::table)
        .values(new_staff)
        .returning(Staff::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Lists every staff member ordered by ID.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_staff(conn: &mut DbConnection<'_>) -> QueryResult<Vec<Staff>> {
    all()
        .order(staff_details::id.asc())
        .select(Staff::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Retrieves a staff member by ID.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_staff(conn: &mut DbConnection<'_>, id: i32) -> QueryResult<Option<Staff>> {
    by_id(id)
        .select(Staff::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Replaces every mutable field of a staff member.
///
/// ## Returns
/// The updated record, or `None` if no row has the given ID.
///
/// ## Errors
/// Returns a database error if the update fails.
pub async fn update_staff(
    conn: &mut DbConnection<'_>,
    id: i32,
    changes: &NewStaff,
) -> QueryResult<Option<Staff>> {
    diesel::update(staff_details::table.find(id))
        .set(changes)
        .returning(Staff::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Summary
/// Deletes a staff member. Dependent availability and assignment rows are left in place.
///
/// ## Returns
/// `true` if a row was deleted.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_staff(conn: &mut DbConnection<'_>, id: i32) -> QueryResult<bool> {
    let deleted = diesel::delete(staff_details::table.find(id))
        .execute(conn)
        .await?;
    Ok(deleted > 0)
}
