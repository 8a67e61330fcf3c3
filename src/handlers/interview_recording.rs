use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use super::write_failure;
use crate::{
    models::interview_recording::{CreateRecordingSchema, UpdateRecordingSchema},
    state::AppState,
};

// GET /api/admin/interview-recordings
pub async fn list_recordings_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.store.interview_recordings().await))
}

// POST /api/admin/interview-recordings
pub async fn create_recording_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateRecordingSchema>,
) -> impl IntoResponse {
    if body.interviewee_name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            "Mohon isi nama orang yang diwawancarai terlebih dahulu",
        )
            .into_response();
    }

    match state.store.create_interview_recording(body).await {
        Ok(recording) => (StatusCode::CREATED, Json(recording)).into_response(),
        Err(e) => write_failure(e, "Terjadi kesalahan saat menyimpan rekaman. Silakan coba lagi."),
    }
}

// PUT /api/admin/interview-recordings/:id
pub async fn update_recording_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(body): Json<UpdateRecordingSchema>,
) -> impl IntoResponse {
    match state.store.update_interview_recording(id, body).await {
        Ok(recording) => (StatusCode::OK, Json(recording)).into_response(),
        Err(e) => write_failure(e, "Terjadi kesalahan saat memperbarui rekaman"),
    }
}
