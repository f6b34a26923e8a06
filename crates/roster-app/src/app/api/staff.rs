use roster_core::constants::STAFF_ROUTE_COMPONENT;
use roster_db::model::staff::{NewStaff, Staff};
use roster_service::staff;
use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};

use super::request::{MessageResponse, json_body, path_id};
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// GET /api/staff - Lists every staff member.
#[handler]
async fn list_staff_handler(depot: &mut Depot) -> AppResult<Json<Vec<Staff>>> {
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(Json(staff::list_staff(&mut conn).await?))
}

/// ## Summary
/// GET /api/staff/{id} - Fetches one staff member.
///
/// ## Errors
/// Returns HTTP 404 if no staff member has the ID.
#[handler]
async fn get_staff_handler(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Staff>> {
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(Json(staff::get_staff(&mut conn, id).await?))
}

/// ## Summary
/// POST /api/staff - Creates a staff member.
///
/// ## Errors
/// Returns HTTP 400 if the body is malformed or a field is invalid.
#[handler]
async fn create_staff_handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<MessageResponse>> {
    let new_staff: NewStaff = json_body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let created = staff::create_staff(&mut conn, &new_staff).await?;

    res.status_code(StatusCode::CREATED);
    Ok(Json(MessageResponse::new(
        "Staff created successfully",
        created.id,
    )))
}

/// ## Summary
/// PUT /api/staff/{id} - Replaces a staff member's fields.
///
/// ## Errors
/// Returns HTTP 400 for invalid input and HTTP 404 if no staff member has the ID.
#[handler]
async fn update_staff_handler(
    req: &mut Request,
    depot: &mut Depot,
) -> AppResult<Json<MessageResponse>> {
    let id = path_id(req)?;
    let changes: NewStaff = json_body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    staff::update_staff(&mut conn, id, &changes).await?;

    Ok(Json(MessageResponse::new("Staff updated successfully", id)))
}

/// ## Summary
/// DELETE /api/staff/{id} - Deletes a staff member.
///
/// ## Errors
/// Returns HTTP 404 if no staff member has the ID.
#[handler]
async fn delete_staff_handler(
    req: &mut Request,
    depot: &mut Depot,
) -> AppResult<Json<MessageResponse>> {
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    staff::delete_staff(&mut conn, id).await?;

    Ok(Json(MessageResponse::new("Staff deleted successfully", id)))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(STAFF_ROUTE_COMPONENT)
        .get(list_staff_handler)
        .post(create_staff_handler)
        .push(
            Router::with_path("{id}")
                .get(get_staff_handler)
                .put(update_staff_handler)
                .delete(delete_staff_handler),
        )
}
