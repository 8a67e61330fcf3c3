use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::state::AppState;

// GET /api/admin/dashboard
pub async fn dashboard_stats_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.store.dashboard_stats().await))
}
