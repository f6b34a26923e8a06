use roster_core::constants::NEEDS_ROUTE_COMPONENT;
use roster_db::model::need::NewServiceUserNeed;
use roster_service::need;
use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};

use super::request::{MessageResponse, json_body, parse_record_id, path_id};
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// Query parameter narrowing the list to one service user.
const SERVICE_USER_QUERY: &str = "service_user_id";

/// ## Summary
/// GET /api/service-user-needs - Lists needs with service user names.
///
/// With `?service_user_id=N` only that service user's needs are returned,
/// without the name columns.
///
/// ## Errors
/// Returns HTTP 400 for a malformed `service_user_id` and HTTP 404 if that
/// service user does not exist.
#[handler]
async fn list_needs_handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<()> {
    let service_user_id = req
        .query::<String>(SERVICE_USER_QUERY)
        .map(|raw| parse_record_id(&raw))
        .transpose()?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    if let Some(service_user_id) = service_user_id {
        res.render(Json(
            need::list_needs_for_service_user(&mut conn, service_user_id).await?,
        ));
    } else {
        res.render(Json(need::list_needs(&mut conn).await?));
    }

    Ok(())
}

/// ## Summary
/// POST /api/service-user-needs - Records a care need.
///
/// ## Errors
/// Returns HTTP 400 for invalid input and HTTP 404 if the service user does not exist.
#[handler]
async fn create_need_handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<MessageResponse>> {
    let new_need: NewServiceUserNeed = json_body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let created = need::create_need(&mut conn, &new_need).await?;

    res.status_code(StatusCode::CREATED);
    Ok(Json(MessageResponse::new(
        "Need added successfully",
        created.id,
    )))
}

/// ## Summary
/// PUT /api/service-user-needs/{id} - Replaces a need.
#[handler]
async fn update_need_handler(
    req: &mut Request,
    depot: &mut Depot,
) -> AppResult<Json<MessageResponse>> {
    let id = path_id(req)?;
    let changes: NewServiceUserNeed = json_body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    need::update_need(&mut conn, id, &changes).await?;

    Ok(Json(MessageResponse::new("Need updated successfully", id)))
}

/// ## Summary
/// DELETE /api/service-user-needs/{id} - Deletes a need.
#[handler]
async fn delete_need_handler(
    req: &mut Request,
    depot: &mut Depot,
) -> AppResult<Json<MessageResponse>> {
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    need::delete_need(&mut conn, id).await?;

    Ok(Json(MessageResponse::new("Need deleted successfully", id)))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(NEEDS_ROUTE_COMPONENT)
        .get(list_needs_handler)
        .post(create_need_handler)
        .push(
            Router::with_path("{id}")
                .put(update_need_handler)
                .delete(delete_need_handler),
        )
}
