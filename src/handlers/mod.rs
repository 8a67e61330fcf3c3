pub mod auth;
pub mod dashboard;
pub mod early_warning;
pub mod historical;
pub mod home;
pub mod interview_recording;
pub mod interview_request;
pub mod press_release;
pub mod recorder;
pub mod weather;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::db::StoreError;

// Traduce un error de escritura a la respuesta genérica que ve el usuario
pub(crate) fn write_failure(error: StoreError, message: &'static str) -> Response {
    match error {
        StoreError::NotFound { .. } => {
            tracing::warn!("{}", error);
            (StatusCode::NOT_FOUND, "Data tidak ditemukan").into_response()
        }
        StoreError::Query { .. } => {
            tracing::error!("{}", error);
            (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
        }
    }
}
