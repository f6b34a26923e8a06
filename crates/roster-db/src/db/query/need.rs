//! Query functions for service user care needs.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::{service_user_details, service_user_needs};
use crate::model::need::{NewServiceUserNeed, ServiceUserNeed, ServiceUserNeedWithUser};

/// ## Summary
/// Returns a query to select all needs.
#[must_use]
pub fn all() -> service_user_needs::BoxedQuery<'static, diesel::pg::Pg> {
    service_user_needs::table.into_boxed()
}

/// ## Summary
/// Returns a query to find the needs of one service user.
#[must_use]
pub fn by_service_user(
    service_user_id: i32,
) -> service_user_needs::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(service_user_needs::service_user_id.eq(service_user_id))
}

/// ## Summary
/// Inserts a new need and returns the inserted record.
///
/// ## Errors
/// Returns a database error if the insert fails.
pub async fn create_need(
    conn: &mut DbConnection<'_>,
    new_need: &NewServiceUserNeed,
) -> QueryResult<ServiceUserNeed> {
    diesel::insert_into(service_user_needs::table)
        .values(new_need)
        .returning(ServiceUserNeed::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Lists the needs recorded for one service user.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_for_service_user(
    conn: &mut DbConnection<'_>,
    service_user_id: i32,
) -> QueryResult<Vec<ServiceUserNeed>> {
    by_service_user(service_user_id)
        .order(service_user_needs::id.asc())
        .select(ServiceUserNeed::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Lists needs joined with service user names. Needs whose service user no
/// longer exists are omitted.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_with_service_user(
    conn: &mut DbConnection<'_>,
) -> QueryResult<Vec<ServiceUserNeedWithUser>> {
    let rows: Vec<(ServiceUserNeed, String, String)> = service_user_needs::table
        .inner_join(service_user_details::table)
        .order(service_user_needs::id.asc())
        .select((
            ServiceUserNeed::as_select(),
            service_user_details::first_name,
            service_user_details::last_name,
        ))
        .load(conn)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(need, user_first_name, user_last_name)| ServiceUserNeedWithUser {
            need,
            user_first_name,
            user_last_name,
        })
        .collect())
}

/// ## Summary
/// Replaces every field of a need by ID.
///
/// ## Returns
/// The updated record, or `None` if no row has the given ID.
///
/// ## Errors
/// Returns a database error if the update fails.
pub async fn update_need(
    conn: &mut DbConnection<'_>,
    id: i32,
    changes: &NewServiceUserNeed,
) -> QueryResult<Option<ServiceUserNeed>> {
    diesel::update(service_user_needs::table.find(id))
        .set(changes)
        .returning(ServiceUserNeed::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Summary
/// Deletes a need.
///
/// ## Returns
/// `true` if a row was deleted.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_need(conn: &mut DbConnection<'_>, id: i32) -> QueryResult<bool> {
    let deleted = diesel::delete(service_user_needs::table.find(id))
        .execute(conn)
        .await?;
    Ok(deleted > 0)
}
