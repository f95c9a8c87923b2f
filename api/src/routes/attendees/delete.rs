//! # Attendee Deletion Route
//!
//! - `DELETE /api/attendees/{attendee_id}`: Remove one roster entry

use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::attendee::Entity as AttendeeEntity;
use sea_orm::EntityTrait;
use util::state::AppState;

/// DELETE /api/attendees/{attendee_id}
///
/// Deletes an attendee by id. Ids are never reissued; a deleted badge simply
/// stops resolving at check-in.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "data": null, "message": "Attendee deleted successfully" }
/// ```
/// - `404 Not Found` — unknown id
/// - `500 Internal Server Error` — Database error
pub async fn delete_attendee(
    State(app_state): State<AppState>,
    Path(attendee_id): Path<String>,
) -> impl IntoResponse {
    let db = app_state.db();

    match AttendeeEntity::delete_by_id(&attendee_id).exec(db).await {
        Ok(result) if result.rows_affected == 0 => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Attendee not found")),
        )
            .into_response(),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Attendee deleted successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
