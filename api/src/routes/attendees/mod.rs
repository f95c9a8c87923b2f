//! # Attendees Routes Module
//!
//! Defines and wires up routes for the `/api/attendees` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (list, export, fetch one)
//! - `post.rs` — POST handlers (create, bulk import)
//! - `put.rs` — PUT handlers (edit descriptive fields)
//! - `delete.rs` — DELETE handlers

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_attendee;
use get::{export_attendees, get_attendee, list_attendees};
use post::{bulk_create_attendees, create_attendee};
use put::update_attendee;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/attendees` route group, mapping HTTP methods to handlers.
///
/// - `GET /attendees` → `list_attendees`
/// - `POST /attendees` → `create_attendee`
/// - `POST /attendees/bulk` → `bulk_create_attendees`
/// - `GET /attendees/export` → `export_attendees`
/// - `GET /attendees/{attendee_id}` → `get_attendee`
/// - `PUT /attendees/{attendee_id}` → `update_attendee`
/// - `DELETE /attendees/{attendee_id}` → `delete_attendee`
pub fn attendees_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_attendees))
        .route("/", post(create_attendee))
        .route("/bulk", post(bulk_create_attendees))
        .route("/export", get(export_attendees))
        .route("/{attendee_id}", get(get_attendee))
        .route("/{attendee_id}", put(update_attendee))
        .route("/{attendee_id}", delete(delete_attendee))
}
