use axum::Router;
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use util::state::AppState;

/// Builds the full `/api` router against a fresh in-memory database.
///
/// Returns the database handle alongside the app so tests can seed and
/// inspect rows directly.
pub async fn make_test_app() -> (Router, DatabaseConnection) {
    let db = setup_test_db().await;
    let app_state = AppState::new(db.clone());

    let app = Router::new().nest("/api", api::routes::routes(app_state));

    (app, db)
}
