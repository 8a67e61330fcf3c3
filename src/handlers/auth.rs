use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    Extension,
};

use crate::{
    models::user::{AuthResponse, Claims, LoginPayload},
    state::AppState,
    utils::security::{authenticate_user, AuthOutcome},
};

// POST /api/auth/login
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> impl IntoResponse {
    let user = match authenticate_user(state.store.as_ref(), &payload.username, &payload.password).await {
        AuthOutcome::Success(user) => user,
        AuthOutcome::Failure(reason) => {
            tracing::info!("Login rechazado para {}: {}", payload.username, reason);
            return (StatusCode::UNAUTHORIZED, reason).into_response();
        }
    };

    match state.jwt.issue(&user) {
        Ok(token) => (
            StatusCode::OK,
            Json(AuthResponse {
                token,
                token_type: "Bearer".to_string(),
                user_type: user.user_type,
                is_logged_in: true,
                user_id: user.id,
                user_name: user.display_name().to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error generando token: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Terjadi kesalahan saat login").into_response()
        }
    }
}

// GET /api/auth/me - datos del token vigente
pub async fn me_handler(Extension(claims): Extension<Claims>) -> impl IntoResponse {
    (StatusCode::OK, Json(claims))
}
