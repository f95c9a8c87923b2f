//! # Check-in Routes Module
//!
//! Wires up the scanner-facing `/api/checkin` endpoint group.
//!
//! ## Structure
//! - `post.rs` — POST handler applying one scan attempt

use axum::{Router, routing::post};
use post::check_in;
use util::state::AppState;

pub mod post;

/// Builds the `/checkin` route group.
///
/// - `POST /checkin` → `check_in`
pub fn checkin_routes() -> Router<AppState> {
    Router::new().route("/", post(check_in))
}
