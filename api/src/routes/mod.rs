//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint
//! - `/checkin` → Scanner-facing check-in endpoint
//! - `/attendees` → Roster management (list, create, bulk import, export, edit, delete)

use crate::routes::{
    attendees::attendees_routes, checkin::checkin_routes, health::health_routes,
};
use axum::Router;
use util::state::AppState;

pub mod attendees;
pub mod checkin;
pub mod health;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router is mounted under `/api` by `main` and carries the
/// shared [`AppState`].
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/checkin", checkin_routes())
        .nest("/attendees", attendees_routes())
        .with_state(app_state)
}
