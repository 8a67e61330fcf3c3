use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::{
    models::{early_warning::EarlyWarningView, press_release::PressRelease, weather::CurrentWeather},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub press_releases: Vec<PressRelease>,
    pub weather: CurrentWeather,
    pub early_warnings: Vec<EarlyWarningView>,
}

// GET /api/home - todo lo que muestra la portada en una sola llamada
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (press_releases, weather, warnings) = tokio::join!(
        state.store.press_releases(),
        state.store.weather_today(),
        state.store.active_early_warnings(),
    );

    let page = HomePage {
        press_releases,
        weather: CurrentWeather::from_rows(&weather),
        early_warnings: warnings.into_iter().map(EarlyWarningView::from).collect(),
    };

    (StatusCode::OK, Json(page))
}
