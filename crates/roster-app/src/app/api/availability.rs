use roster_core::constants::AVAILABILITY_ROUTE_COMPONENT;
use roster_db::model::availability::{NewStaffAvailability, StaffAvailabilityWithStaff};
use roster_service::availability;
use salvo::{Depot, Request, Router, handler, writing::Json};

use super::request::{MessageResponse, json_body, path_id};
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// GET /api/staff-availability - Lists availability with staff names.
#[handler]
async fn list_availability_handler(
    depot: &mut Depot,
) -> AppResult<Json<Vec<StaffAvailabilityWithStaff>>> {
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(Json(availability::list_availability(&mut conn).await?))
}

/// ## Summary
/// POST /api/staff-availability - Stores a staff member's availability,
/// overwriting any row they already have.
///
/// ## Errors
/// Returns HTTP 400 for invalid input and HTTP 404 if the staff member does not exist.
#[handler]
async fn upsert_availability_handler(
    req: &mut Request,
    depot: &mut Depot,
) -> AppResult<Json<MessageResponse>> {
    let submission: NewStaffAvailability = json_body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let stored = availability::upsert_availability(&mut conn, &submission).await?;

    Ok(Json(MessageResponse::new(
        "Availability saved successfully",
        stored.id,
    )))
}

/// ## Summary
/// PUT /api/staff-availability/{id} - Replaces an availability row.
///
/// ## Errors
/// Returns HTTP 400 for invalid input, HTTP 404 if the row or staff member does
/// not exist, and HTTP 409 if the staff member already has another row.
#[handler]
async fn update_availability_handler(
    req: &mut Request,
    depot: &mut Depot,
) -> AppResult<Json<MessageResponse>> {
    let id = path_id(req)?;
    let changes: NewStaffAvailability = json_body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    availability::update_availability(&mut conn, id, &changes).await?;

    Ok(Json(MessageResponse::new(
        "Availability updated successfully",
        id,
    )))
}

/// ## Summary
/// DELETE /api/staff-availability/{id} - Deletes an availability row.
#[handler]
async fn delete_availability_handler(
    req: &mut Request,
    depot: &mut Depot,
) -> AppResult<Json<MessageResponse>> {
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    availability::delete_availability(&mut conn, id).await?;

    Ok(Json(MessageResponse::new(
        "Availability deleted successfully",
        id,
    )))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(AVAILABILITY_ROUTE_COMPONENT)
        .get(list_availability_handler)
        .post(upsert_availability_handler)
        .push(
            Router::with_path("{id}")
                .put(update_availability_handler)
                .delete(delete_availability_handler),
        )
}
