use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{models::early_warning::EarlyWarningView, state::AppState};

// GET /api/early-warnings - solo las activas, con su color de nivel
pub async fn list_early_warnings_handler(State(state): State<AppState>) -> impl IntoResponse {
    let warnings: Vec<EarlyWarningView> = state
        .store
        .active_early_warnings()
        .await
        .into_iter()
        .map(EarlyWarningView::from)
        .collect();

    (StatusCode::OK, Json(warnings))
}
