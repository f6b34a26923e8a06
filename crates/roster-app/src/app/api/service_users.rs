use roster_core::constants::SERVICE_USERS_ROUTE_COMPONENT;
use roster_db::model::service_user::{NewServiceUser, ServiceUser};
use roster_service::service_user;
use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};

use super::request::{MessageResponse, json_body, path_id};
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// GET /api/service-users - Lists every service user.
#[handler]
async fn list_service_users_handler(depot: &mut Depot) -> AppResult<Json<Vec<ServiceUser>>> {
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(Json(service_user::list_service_users(&mut conn).await?))
}

/// ## Summary
/// GET /api/service-users/{id} - Fetches one service user.
///
/// ## Errors
/// Returns HTTP 404 if no service user has the ID.
#[handler]
async fn get_service_user_handler(
    req: &mut Request,
    depot: &mut Depot,
) -> AppResult<Json<ServiceUser>> {
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(Json(service_user::get_service_user(&mut conn, id).await?))
}

/// ## Summary
/// POST /api/service-users - Creates a service user.
///
/// ## Errors
/// Returns HTTP 400 if the body is malformed or a field is invalid.
#[handler]
async fn create_service_user_handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<MessageResponse>> {
    let new_user: NewServiceUser = json_body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let created = service_user::create_service_user(&mut conn, &new_user).await?;

    res.status_code(StatusCode::CREATED);
    Ok(Json(MessageResponse::new(
        "Service user created successfully",
        created.id,
    )))
}

/// ## Summary
/// PUT /api/service-users/{id} - Replaces a service user's fields.
///
/// ## Errors
/// Returns HTTP 400 for invalid input and HTTP 404 if no service user has the ID.
#[handler]
async fn update_service_user_handler(
    req: &mut Request,
    depot: &mut Depot,
) -> AppResult<Json<MessageResponse>> {
    let id = path_id(req)?;
    let changes: NewServiceUser = json_body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    service_user::update_service_user(&mut conn, id, &changes).await?;

    Ok(Json(MessageResponse::new("Service user updated successfully", id)))
}

/// ## Summary
/// DELETE /api/service-users/{id} - Deletes a service user.
///
/// ## Errors
/// Returns HTTP 404 if no service user has the ID.
#[handler]
async fn delete_service_user_handler(
    req: &mut Request,
    depot: &mut Depot,
) -> AppResult<Json<MessageResponse>> {
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    service_user::delete_service_user(&mut conn, id).await?;

    Ok(Json(MessageResponse::new("Service user deleted successfully", id)))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(SERVICE_USERS_ROUTE_COMPONENT)
        .get(list_service_users_handler)
        .post(create_service_user_handler)
        .push(
            Router::with_path("{id}")
                .get(get_service_user_handler)
                .put(update_service_user_handler)
                .delete(delete_service_user_handler),
        )
}
