use crate::response::ApiResponse;
use crate::routes::attendees::common::AttendeeResponse;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::attendee::{Column as AttendeeColumn, Entity as AttendeeEntity};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ListAttendeesQuery {
    #[validate(range(min = 1))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<u64>,
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AttendeesListResponse {
    pub attendees: Vec<AttendeeResponse>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/attendees
///
/// Retrieve a paginated list of attendees ordered by creation time.
///
/// ### Query Parameters
/// - `page` (optional): Page number (default: 1, min: 1)
/// - `per_page` (optional): Items per page (default: 20, min: 1, max: 100)
/// - `query` (optional): Case-insensitive partial match on name
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "attendees": [
///       {
///         "id": "9b2f...",
///         "name": "Alice",
///         "title": "Chair",
///         "district": "North",
///         "region": "A",
///         "scanned": false,
///         "scanTime": null,
///         "scannedTimes": 0,
///         "createdAt": "2026-01-05T08:00:00+00:00",
///         "updatedAt": "2026-01-05T08:00:00+00:00"
///       }
///     ],
///     "page": 1,
///     "per_page": 20,
///     "total": 135
///   },
///   "message": "Attendees retrieved successfully"
/// }
/// ```
/// - `400 Bad Request` — Invalid query parameters
/// - `500 Internal Server Error` — Database error
pub async fn list_attendees(
    State(app_state): State<AppState>,
    Query(query): Query<ListAttendeesQuery>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = query.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {e}"))),
        )
            .into_response();
    }

    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(20);

    let mut select = AttendeeEntity::find().order_by_asc(AttendeeColumn::CreatedAt);
    if let Some(needle) = query.query.as_deref().filter(|s| !s.is_empty()) {
        select = select.filter(AttendeeColumn::Name.contains(needle));
    }

    let paginator = select.paginate(db, per_page);

    let total = match paginator.num_items().await {
        Ok(n) => n,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    match paginator.fetch_page(page - 1).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AttendeesListResponse {
                    attendees: rows.into_iter().map(AttendeeResponse::from).collect(),
                    page,
                    per_page,
                    total,
                },
                "Attendees retrieved successfully",
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

/// GET /api/attendees/export
///
/// Retrieve the full roster in creation order, unpaginated. This feeds the
/// spreadsheet export on the admin side; the client does the file conversion.
///
/// ### Responses
/// - `200 OK` — JSON array of attendees under `data`
/// - `500 Internal Server Error` — Database error
pub async fn export_attendees(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match AttendeeEntity::find()
        .order_by_asc(AttendeeColumn::CreatedAt)
        .all(db)
        .await
    {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows.into_iter()
                    .map(AttendeeResponse::from)
                    .collect::<Vec<_>>(),
                "Attendees exported successfully",
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

/// GET /api/attendees/{attendee_id}
///
/// Fetch a single attendee by id.
///
/// ### Responses
/// - `200 OK` — attendee under `data`
/// - `404 Not Found` — unknown id
/// - `500 Internal Server Error` — Database error
pub async fn get_attendee(
    State(app_state): State<AppState>,
    Path(attendee_id): Path<String>,
) -> impl IntoResponse {
    let db = app_state.db();

    match AttendeeEntity::find_by_id(&attendee_id).one(db).await {
        Ok(Some(attendee)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AttendeeResponse::from(attendee),
                "Attendee retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Attendee not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
