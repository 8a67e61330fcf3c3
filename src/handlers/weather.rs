use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::write_failure;
use crate::{models::weather::UpsertWeatherSchema, state::AppState};

// GET /api/weather - pronóstico de hoy
pub async fn list_weather_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.store.weather_today().await))
}

// PUT /api/admin/weather/:location
pub async fn upsert_weather_handler(
    Path(location): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<UpsertWeatherSchema>,
) -> impl IntoResponse {
    match state.store.upsert_weather(&location, body).await {
        Ok(weather) => (StatusCode::OK, Json(weather)).into_response(),
        Err(e) => write_failure(e, "Gagal memperbarui data cuaca"),
    }
}
