use axum::{
    body::Bytes,
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::write_failure;
use crate::{
    models::user::Claims,
    recorder::{RecorderError, SessionUpdate},
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct StartSessionSchema {
    pub token: Option<String>,
    #[serde(default)]
    pub interviewee_name: String,
}

fn recorder_failure(error: RecorderError) -> Response {
    let status = match error {
        RecorderError::NotFound(_) => StatusCode::NOT_FOUND,
        RecorderError::AlreadyStopped | RecorderError::StillRecording | RecorderError::SaveInProgress => {
            StatusCode::CONFLICT
        }
        RecorderError::MissingIntervieweeName => {
            return (
                StatusCode::BAD_REQUEST,
                "Mohon isi nama orang yang diwawancarai terlebih dahulu",
            )
                .into_response()
        }
    };
    (status, error.to_string()).into_response()
}

// POST /api/admin/recorder/sessions
pub async fn start_session_handler(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    body: Bytes,
) -> impl IntoResponse {
    // Sin cuerpo se empieza con token y nombre vacíos; un JSON mal formado no
    let body = if body.is_empty() {
        StartSessionSchema::default()
    } else {
        match serde_json::from_slice::<StartSessionSchema>(&body) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Cuerpo inválido al iniciar grabación: {}", e);
                return (StatusCode::BAD_REQUEST, "Format data tidak valid").into_response();
            }
        }
    };
    let session = state
        .recorder
        .start(body.token, body.interviewee_name, claims.user_id)
        .await;
    (StatusCode::CREATED, Json(session)).into_response()
}

// GET /api/admin/recorder/sessions/:id
pub async fn get_session_handler(Path(id): Path<Uuid>, State(state): State<AppState>) -> impl IntoResponse {
    match state.recorder.get(id).await {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(e) => recorder_failure(e),
    }
}

// POST /api/admin/recorder/sessions/:id/pause - pausa o reanuda
pub async fn toggle_pause_handler(Path(id): Path<Uuid>, State(state): State<AppState>) -> impl IntoResponse {
    match state.recorder.toggle_pause(id).await {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(e) => recorder_failure(e),
    }
}

// POST /api/admin/recorder/sessions/:id/stop
pub async fn stop_session_handler(Path(id): Path<Uuid>, State(state): State<AppState>) -> impl IntoResponse {
    match state.recorder.stop(id).await {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(e) => recorder_failure(e),
    }
}

// PUT /api/admin/recorder/sessions/:id - token, nombre o transcripción editada
pub async fn update_session_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(body): Json<SessionUpdate>,
) -> impl IntoResponse {
    match state.recorder.update(id, body).await {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(e) => recorder_failure(e),
    }
}

// POST /api/admin/recorder/sessions/:id/save
pub async fn save_session_handler(Path(id): Path<Uuid>, State(state): State<AppState>) -> impl IntoResponse {
    let row = match state.recorder.begin_save(id).await {
        Ok(row) => row,
        Err(e) => return recorder_failure(e),
    };

    match state.store.create_interview_recording(row).await {
        Ok(recording) => {
            state.recorder.finish_save(id).await;
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Rekaman berhasil disimpan ke database",
                    "data": recording,
                })),
            )
                .into_response()
        }
        Err(e) => {
            state.recorder.abort_save(id).await;
            write_failure(e, "Terjadi kesalahan saat menyimpan rekaman. Silakan coba lagi.")
        }
    }
}

// DELETE /api/admin/recorder/sessions/:id - descarta sin guardar
pub async fn discard_session_handler(Path(id): Path<Uuid>, State(state): State<AppState>) -> impl IntoResponse {
    match state.recorder.discard(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => recorder_failure(e),
    }
}
