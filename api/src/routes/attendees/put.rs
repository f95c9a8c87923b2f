//! # Attendee Update Route
//!
//! - `PUT /api/attendees/{attendee_id}`: Edit descriptive fields

use crate::response::ApiResponse;
use crate::routes::attendees::common::{AttendeeResponse, UpdateAttendeeRequest};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use db::models::attendee::{ActiveModel as AttendeeActiveModel, Entity as AttendeeEntity};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use util::state::AppState;
use validator::Validate;

/// PUT /api/attendees/{attendee_id}
///
/// Updates an attendee's descriptive fields (name, title, district, region).
/// Omitted fields are left unchanged. Check-in state (`scanned`, `scanTime`,
/// `scannedTimes`) is not editable here; it belongs to the check-in engine.
///
/// ### Request Body
/// ```json
/// { "name": "Alice B.", "district": "South" }
/// ```
///
/// ### Responses
/// - `200 OK` — updated attendee under `data`
/// - `400 Bad Request` — Validation failure (empty name)
/// - `404 Not Found` — unknown id
/// - `500 Internal Server Error` — Database error
pub async fn update_attendee(
    State(app_state): State<AppState>,
    Path(attendee_id): Path<String>,
    Json(req): Json<UpdateAttendeeRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    let db = app_state.db();

    let attendee = match AttendeeEntity::find_by_id(&attendee_id).one(db).await {
        Ok(Some(attendee)) => attendee,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Attendee not found")),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    let mut active: AttendeeActiveModel = attendee.into();
    if let Some(name) = req.name {
        active.name = Set(name);
    }
    if let Some(title) = req.title {
        active.title = Set(Some(title));
    }
    if let Some(district) = req.district {
        active.district = Set(Some(district));
    }
    if let Some(region) = req.region {
        active.region = Set(Some(region));
    }
    active.updated_at = Set(Utc::now());

    match active.update(db).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AttendeeResponse::from(updated),
                "Attendee updated successfully",
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
