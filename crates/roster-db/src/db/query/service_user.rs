//! Query functions for service user records.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::service_user_details;
use crate::model::service_user::{NewServiceUser, ServiceUser};

/// ## Summary
/// Returns a query to select all service users.
#[must_use]
pub fn all() -> service_user_details::BoxedQuery<'static, diesel::pg::Pg> {
    service_user_details::table.into_boxed()
}

/// ## Summary
/// Returns a query to find a service user by ID.
#[must_use]
pub fn by_id(id: i32) -> service_user_details::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(service_user_details::id.eq(id))
}

/// ## Summary
/// Returns a query to find service users by reference code.
#[must_use]
pub fn by_reference_code(code: &str) -> service_user_details::BoxedQuery<'_, diesel::pg::Pg> {
    all().filter(service_user_details::unique_reference_code.eq(code))
}

/// ## Summary
/// Checks whether a service user with the given ID exists.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn exists(conn: &mut DbConnection<'_>, id: i32) -> QueryResult<bool> {
    diesel::select(diesel::dsl::exists(service_user_details::table.find(id)))
        .get_result(conn)
        .await
}

/// ## Summary
/// Inserts a new service user and returns the inserted record.
///
/// ## Errors
/// Returns a database error if the insert fails.
pub async fn create_service_user(
    conn: &mut DbConnection<'_>,
    new_user: &NewServiceUser,
) -> QueryResult<ServiceUser> {
    diesel::insert_into(service_user_details::table)
        .values(new_user)
        .returning(ServiceUser::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Lists every service user ordered by ID.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_service_users(conn: &mut DbConnection<'_>) -> QueryResult<Vec<ServiceUser>> {
    all()
        .order(service_user_details::id.asc())
        .select(ServiceUser::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Retrieves a service user by ID.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_service_user(
    conn: &mut DbConnection<'_>,
    id: i32,
) -> QueryResult<Option<ServiceUser>> {
    by_id(id)
        .select(ServiceUser::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Counts service users holding a reference code, skipping `exclude_id`.
///
/// The code is only logically unique, so callers may see more than one.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn count_by_reference_code(
    conn: &mut DbConnection<'_>,
    code: &str,
    exclude_id: Option<i32>,
) -> QueryResult<i64> {
    let mut query = by_reference_code(code);
    if let Some(id) = exclude_id {
        query = query.filter(service_user_details::id.ne(id));
    }
    query.count().get_result(conn).await
}

/// ## Summary
/// Replaces every mutable field of a service user.
///
/// ## Returns
/// The updated record, or `None` if no row has the given ID.
///
/// ## Errors
/// Returns a database error if the update fails.
pub async fn update_service_user(
    conn: &mut DbConnection<'_>,
    id: i32,
    changes: &NewServiceUser,
) -> QueryResult<Option<ServiceUser>> {
    diesel::update(service_user_details::table.find(id))
        .set(changes)
        .returning(ServiceUser::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Summary
/// Deletes a service user. Dependent assignment and need rows are left in place.
///
/// ## Returns
/// `true` if a row was deleted.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_service_user(conn: &mut DbConnection<'_>, id: i32) -> QueryResult<bool> {
    let deleted = diesel::delete(service_user_details::table.find(id))
        .execute(conn)
        .await?;
    Ok(deleted > 0)
}
