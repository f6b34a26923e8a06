use roster_core::constants::ASSIGNMENTS_ROUTE_COMPONENT;
use roster_db::model::assignment::{AssignmentWithNames, NewAssignment};
use roster_service::assignment;
use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};

use super::request::{MessageResponse, json_body, path_id};
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// GET /api/assignments - Lists assignments with staff and service user
/// names, most recent date first.
#[handler]
async fn list_assignments_handler(
    depot: &mut Depot,
) -> AppResult<Json<Vec<AssignmentWithNames>>> {
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(Json(assignment::list_assignments(&mut conn).await?))
}

/// ## Summary
/// POST /api/assignments - Schedules a staff member to visit a service user.
///
/// ## Errors
/// - HTTP 400 for a malformed body or an empty time range
/// - HTTP 404 if the staff member or service user does not exist
/// - HTTP 409 if the service user already has an assignment that day
#[handler]
async fn create_assignment_handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<MessageResponse>> {
    let new_assignment: NewAssignment = json_body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let created = assignment::create_assignment(&mut conn, &new_assignment).await?;

    res.status_code(StatusCode::CREATED);
    Ok(Json(MessageResponse::new(
        "Assignment created successfully",
        created.id,
    )))
}

/// ## Summary
/// PUT /api/assignments/{id} - Replaces an assignment, with the same checks
/// as creation.
#[handler]
async fn update_assignment_handler(
    req: &mut Request,
    depot: &mut Depot,
) -> AppResult<Json<MessageResponse>> {
    let id = path_id(req)?;
    let changes: NewAssignment = json_body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    assignment::update_assignment(&mut conn, id, &changes).await?;

    Ok(Json(MessageResponse::new(
        "Assignment updated successfully",
        id,
    )))
}

/// ## Summary
/// DELETE /api/assignments/{id} - Cancels an assignment.
#[handler]
async fn delete_assignment_handler(
    req: &mut Request,
    depot: &mut Depot,
) -> AppResult<Json<MessageResponse>> {
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    assignment::delete_assignment(&mut conn, id).await?;

    Ok(Json(MessageResponse::new(
        "Assignment deleted successfully",
        id,
    )))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(ASSIGNMENTS_ROUTE_COMPONENT)
        .get(list_assignments_handler)
        .post(create_assignment_handler)
        .push(
            Router::with_path("{id}")
                .put(update_assignment_handler)
                .delete(delete_assignment_handler),
        )
}
