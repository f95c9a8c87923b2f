//! # Check-in Route
//!
//! - `POST /api/checkin`: apply one scan attempt for an attendee id

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::response::ApiResponse;
use db::checkin::{self, CheckInError, CheckInOutcome, CheckInReceipt};
use util::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub id: Option<String>,
    /// Scanner-claimed timestamp (RFC 3339). Server time is used when absent.
    pub scan_time: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInUser {
    pub name: String,
    pub scan_time: Option<String>,
    pub scanned_times: i32,
}

#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub status: &'static str,
    pub user: CheckInUser,
}

impl From<CheckInReceipt> for CheckInUser {
    fn from(receipt: CheckInReceipt) -> Self {
        Self {
            name: receipt.name,
            scan_time: receipt.scan_time.map(|t| t.to_rfc3339()),
            scanned_times: receipt.scanned_times,
        }
    }
}

/// POST /api/checkin
///
/// Resolves a scanned QR code to an attendee and records the presentation.
/// The first accepted scan flips the attendee to scanned and stamps the scan
/// time; any later presentation only bumps the counter and reports the
/// original time back, so the scanner UI can show a warning instead of a
/// second welcome.
///
/// ### Request Body
/// ```json
/// { "id": "9b2f...", "scanTime": "2024-01-01T10:00:00Z" }
/// ```
///
/// ### Responses
/// - `200 OK` — first accepted scan
/// ```json
/// {
///   "success": true,
///   "data": {
///     "status": "success",
///     "user": { "name": "Alice", "scanTime": "2024-01-01T10:00:00+00:00", "scannedTimes": 1 }
///   },
///   "message": "Successfully scanned"
/// }
/// ```
/// - `409 Conflict` — badge already scanned; `data.status` is `"already_scanned"`,
///   `user.scanTime` is the original first-scan time and `user.scannedTimes`
///   includes this presentation. Still `success: true`: an expected outcome
///   the operator UI renders as a warning.
/// - `400 Bad Request` — missing `id` or unparsable `scanTime`
/// - `404 Not Found` — unknown attendee id
/// - `500 Internal Server Error` — persistence failure; the attempt may not
///   have been durably recorded
pub async fn check_in(
    State(app_state): State<AppState>,
    Json(body): Json<CheckInRequest>,
) -> Response {
    let Some(id) = body.id.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("Missing required fields")),
        )
            .into_response();
    };

    let claimed_scan_time = match body.scan_time.as_deref() {
        None => None,
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(ts) => Some(ts.with_timezone(&Utc)),
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<()>::error(
                        "scanTime must be an ISO-8601 timestamp",
                    )),
                )
                    .into_response();
            }
        },
    };

    match checkin::attempt_check_in(app_state.db(), id, claimed_scan_time).await {
        Ok(CheckInOutcome::CheckedIn(receipt)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CheckInResponse {
                    status: "success",
                    user: receipt.into(),
                },
                "Successfully scanned",
            )),
        )
            .into_response(),
        Ok(CheckInOutcome::AlreadyCheckedIn(receipt)) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::success(
                CheckInResponse {
                    status: "already_scanned",
                    user: receipt.into(),
                },
                "User already scanned",
            )),
        )
            .into_response(),
        Err(CheckInError::InvalidRequest) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("Missing required fields")),
        )
            .into_response(),
        Err(CheckInError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Attendee not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(id, error = %e, "check-in attempt failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Failed to update attendee status")),
            )
                .into_response()
        }
    }
}
