use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use uuid::Uuid;

use super::write_failure;
use crate::{
    models::interview_request::{CreateInterviewRequestSchema, UpdateStatusSchema},
    state::AppState,
};

// POST /api/interview-requests (formulario público)
pub async fn create_interview_request_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateInterviewRequestSchema>,
) -> impl IntoResponse {
    let required = [&body.interviewer_name, &body.media_name, &body.topic];
    if required.iter().any(|field| field.trim().is_empty()) {
        return (StatusCode::BAD_REQUEST, "Mohon lengkapi semua data yang wajib diisi").into_response();
    }

    match state.store.create_interview_request(body).await {
        Ok(request) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Permohonan wawancara berhasil dikirim!",
                "data": request,
            })),
        )
            .into_response(),
        Err(e) => write_failure(
            e,
            "Terjadi kesalahan saat mengirim permohonan. Silakan coba lagi.",
        ),
    }
}

// GET /api/admin/interview-requests
pub async fn list_interview_requests_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.store.interview_requests().await))
}

// PUT /api/admin/interview-requests/:id/status
pub async fn update_interview_status_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(body): Json<UpdateStatusSchema>,
) -> impl IntoResponse {
    match state
        .store
        .update_interview_request_status(id, body.status, body.notes)
        .await
    {
        Ok(change) => (StatusCode::OK, Json(change)).into_response(),
        Err(e) => write_failure(e, "Gagal memperbarui status permohonan"),
    }
}
