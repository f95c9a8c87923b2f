//! # Attendee Creation Routes
//!
//! - `POST /api/attendees`: Create a single attendee
//! - `POST /api/attendees/bulk`: Import many attendees at once (roster upload)

use crate::response::ApiResponse;
use crate::routes::attendees::common::{
    AttendeeResponse, BulkCreateAttendeesRequest, CreateAttendeeRequest,
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::attendee::Model as AttendeeModel;
use util::state::AppState;
use validator::Validate;

/// POST /api/attendees
///
/// Creates a single attendee. The server assigns the id that will be encoded
/// in the QR code; check-in state starts unscanned.
///
/// ### Request Body
/// ```json
/// { "name": "Alice", "title": "Chair", "district": "North", "region": "A" }
/// ```
///
/// ### Responses
/// - `201 Created` — full attendee object including the assigned id
/// - `400 Bad Request` — Validation failure (empty name)
/// - `500 Internal Server Error` — Database error
pub async fn create_attendee(
    State(app_state): State<AppState>,
    Json(req): Json<CreateAttendeeRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    match AttendeeModel::create(
        app_state.db(),
        &req.name,
        req.title.as_deref(),
        req.district.as_deref(),
        req.region.as_deref(),
    )
    .await
    {
        Ok(attendee) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                AttendeeResponse::from(attendee),
                "Attendee created successfully",
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

/// POST /api/attendees/bulk
///
/// Imports a batch of attendees in order, as produced by the admin's
/// spreadsheet upload. The first failing row aborts the import and its index
/// is reported; rows before it are already committed.
///
/// ### Request Body
/// ```json
/// {
///   "attendees": [
///     { "name": "Alice", "title": "Chair", "district": "North", "region": "A" },
///     { "name": "Bob" }
///   ]
/// }
/// ```
///
/// ### Responses
/// - `201 Created` — JSON array of created attendees, ids included so QR
///   codes can be rendered immediately
/// - `400 Bad Request` — Validation failure (empty batch or empty name)
/// - `500 Internal Server Error` — Database error, message names the failing row
pub async fn bulk_create_attendees(
    State(app_state): State<AppState>,
    Json(req): Json<BulkCreateAttendeesRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    let db = app_state.db();
    let mut results = Vec::with_capacity(req.attendees.len());

    for (row, attendee_req) in req.attendees.into_iter().enumerate() {
        match AttendeeModel::create(
            db,
            &attendee_req.name,
            attendee_req.title.as_deref(),
            attendee_req.district.as_deref(),
            attendee_req.region.as_deref(),
        )
        .await
        {
            Ok(attendee) => results.push(AttendeeResponse::from(attendee)),
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error(format!(
                        "Database error while creating row {row}: {e}"
                    ))),
                )
                    .into_response();
            }
        }
    }

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            results,
            "Attendees created successfully",
        )),
    )
        .into_response()
}
