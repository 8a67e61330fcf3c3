use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::write_failure;
use crate::{models::press_release::CreatePressReleaseSchema, state::AppState};

// GET /api/press-releases (público)
pub async fn list_press_releases_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.store.press_releases().await))
}

// POST /api/admin/press-releases (admin)
pub async fn create_press_release_handler(
    State(state): State<AppState>,
    Json(body): Json<CreatePressReleaseSchema>,
) -> impl IntoResponse {
    if body.title.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Judul wajib diisi").into_response();
    }

    match state.store.create_press_release(body).await {
        Ok(release) => (StatusCode::CREATED, Json(release)).into_response(),
        Err(e) => write_failure(e, "Gagal menyimpan siaran pers"),
    }
}
