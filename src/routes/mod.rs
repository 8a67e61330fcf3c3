use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{
    handlers::{
        auth, dashboard, early_warning, historical, home, interview_recording, interview_request,
        press_release, recorder, weather,
    },
    state::AppState,
    utils::jwt::{admin_middleware, auth_middleware},
};

pub fn create_routes(state: AppState) -> Router {
    // 1. Rutas públicas
    let public_routes = Router::new()
        .route("/api/auth/login", post(auth::login_handler))
        .route("/api/home", get(home::home_handler))
        .route("/api/press-releases", get(press_release::list_press_releases_handler))
        .route("/api/weather", get(weather::list_weather_handler))
        .route("/api/early-warnings", get(early_warning::list_early_warnings_handler))
        .route("/api/interview-requests", post(interview_request::create_interview_request_handler))
        .route("/api/historical", get(historical::historical_handler));

    // 2. Cualquier usuario con sesión
    let user_routes = Router::new()
        .route("/api/auth/me", get(auth::me_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    // 3. Panel de administración y grabadora
    let admin_routes = Router::new()
        .route("/api/admin/dashboard", get(dashboard::dashboard_stats_handler))
        .route("/api/admin/press-releases", post(press_release::create_press_release_handler))
        .route("/api/admin/weather/:location", put(weather::upsert_weather_handler))
        .route("/api/admin/interview-requests", get(interview_request::list_interview_requests_handler))
        .route(
            "/api/admin/interview-requests/:id/status",
            put(interview_request::update_interview_status_handler),
        )
        .route(
            "/api/admin/interview-recordings",
            get(interview_recording::list_recordings_handler).post(interview_recording::create_recording_handler),
        )
        .route(
            "/api/admin/interview-recordings/:id",
            put(interview_recording::update_recording_handler),
        )
        .route("/api/admin/recorder/sessions", post(recorder::start_session_handler))
        .route(
            "/api/admin/recorder/sessions/:id",
            get(recorder::get_session_handler)
                .put(recorder::update_session_handler)
                .delete(recorder::discard_session_handler),
        )
        .route("/api/admin/recorder/sessions/:id/pause", post(recorder::toggle_pause_handler))
        .route("/api/admin/recorder/sessions/:id/stop", post(recorder::stop_session_handler))
        .route("/api/admin/recorder/sessions/:id/save", post(recorder::save_session_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_middleware));

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(admin_routes)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::{MockStore, MOCK_ID},
        recorder::Recorder,
        utils::jwt::JwtKeys,
    };
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::{sync::Arc, time::Duration};
    use tower::ServiceExt;

    const DELAY: Duration = Duration::from_secs(2);

    fn test_app() -> Router {
        create_routes(AppState {
            store: Arc::new(MockStore::new()),
            jwt: JwtKeys::new("secreto-de-pruebas"),
            recorder: Recorder::new(DELAY),
        })
    }

    async fn send(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let req = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, json)
    }

    async fn login(app: &Router, username: &str, password: &str) -> String {
        let (status, body) = send(
            app,
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn login_returns_token_and_client_flags() {
        let app = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "username": "admin", "password": "admin123" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token_type"], "Bearer");
        assert_eq!(body["user_type"], "admin");
        assert_eq!(body["is_logged_in"], true);
        assert_eq!(body["user_name"], "Administrator");
    }

    #[tokio::test]
    async fn wrong_password_for_existing_user_is_rejected() {
        let app = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "username": "user", "password": "admin123" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "Invalid password");
    }

    #[tokio::test]
    async fn home_serves_placeholders_in_offline_mode() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/api/home", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["press_releases"].as_array().unwrap().len(), 3);
        assert_eq!(body["weather"]["location"], "Jakarta");
        assert_eq!(body["weather"]["icon"], "sun");
        assert_eq!(body["early_warnings"][0]["warning_level"], "Sedang");
        assert_eq!(body["early_warnings"][0]["level_color"], "bg-yellow-100 text-yellow-800");
    }

    #[tokio::test]
    async fn interview_request_is_created_pending_and_keeps_virtual_link() {
        let app = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/interview-requests",
            None,
            Some(json!({
                "interviewer_name": "Rina",
                "media_name": "Kompas",
                "topic": "Banjir",
                "interview_method": "virtual",
                "interview_datetime": "2024-01-15T10:00:00",
                "virtual_link": "https://meet.example/abc",
                "status": "approved"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Permohonan wawancara berhasil dikirim!");
        assert_eq!(body["data"]["status"], "pending");
        assert_eq!(body["data"]["virtual_link"], "https://meet.example/abc");
        assert_eq!(body["data"]["id"], MOCK_ID.to_string());
    }

    #[tokio::test]
    async fn non_virtual_request_drops_link() {
        let app = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/interview-requests",
            None,
            Some(json!({
                "interviewer_name": "Andi",
                "media_name": "Tempo",
                "topic": "Gempa",
                "interview_method": "whatsapp",
                "interview_datetime": "2024-01-15T10:00:00",
                "virtual_link": "https://meet.example/abc"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["virtual_link"], Value::Null);
    }

    #[tokio::test]
    async fn blank_required_field_is_bad_request() {
        let app = test_app();
        let (status, _) = send(
            &app,
            "POST",
            "/api/interview-requests",
            None,
            Some(json!({
                "interviewer_name": "  ",
                "media_name": "Tempo",
                "topic": "Gempa",
                "interview_method": "phone",
                "interview_datetime": "2024-01-15T10:00:00"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn historical_view_is_public_and_empty_offline() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/api/historical?search=kompas&status=all", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"], json!([]));
        assert_eq!(body["summary"]["total"], 0);
    }

    #[tokio::test]
    async fn admin_routes_require_admin_token() {
        let app = test_app();

        let (status, _) = send(&app, "GET", "/api/admin/dashboard", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, "GET", "/api/admin/dashboard", Some("no-es-un-jwt"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let user_token = login(&app, "user", "user123").await;
        let (status, _) = send(&app, "GET", "/api/admin/dashboard", Some(user_token.as_str()), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let admin_token = login(&app, "admin", "admin123").await;
        let (status, body) = send(&app, "GET", "/api/admin/dashboard", Some(admin_token.as_str()), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_interviews"], 0);
        assert_eq!(body["total_press_releases"], 0);
    }

    #[tokio::test]
    async fn me_works_for_any_logged_in_user() {
        let app = test_app();
        let token = login(&app, "user", "user123").await;
        let (status, body) = send(&app, "GET", "/api/auth/me", Some(token.as_str()), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_type"], "user");
        assert_eq!(body["sub"], "user");
    }

    #[tokio::test]
    async fn status_update_echoes_in_offline_mode() {
        let app = test_app();
        let token = login(&app, "admin", "admin123").await;
        let id = uuid::Uuid::new_v4();
        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/admin/interview-requests/{}/status", id),
            Some(token.as_str()),
            Some(json!({ "status": "approved", "notes": "Jadwal dikonfirmasi" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id.to_string());
        assert_eq!(body["status"], "approved");
        assert_eq!(body["notes"], "Jadwal dikonfirmasi");
    }

    #[tokio::test(start_paused = true)]
    async fn recorder_flow_saves_simulated_transcript() {
        let app = test_app();
        let token = login(&app, "admin", "admin123").await;

        let (status, session) = send(
            &app,
            "POST",
            "/api/admin/recorder/sessions",
            Some(token.as_str()),
            Some(json!({ "token": "TK-9", "interviewee_name": "Bu Ani" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(session["state"], "recording");
        let id = session["id"].as_str().unwrap().to_string();

        let (status, stopped) = send(&app, "POST", &format!("/api/admin/recorder/sessions/{id}/stop"), Some(token.as_str()), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stopped["transcription_pending"], true);

        let (status, _) = send(&app, "POST", &format!("/api/admin/recorder/sessions/{id}/stop"), Some(token.as_str()), None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        tokio::time::sleep(DELAY + Duration::from_millis(10)).await;

        let (_, view) = send(&app, "GET", &format!("/api/admin/recorder/sessions/{id}"), Some(token.as_str()), None).await;
        assert!(view["transcription"].as_str().unwrap().contains("Bu Ani"));

        let (status, saved) = send(&app, "POST", &format!("/api/admin/recorder/sessions/{id}/save"), Some(token.as_str()), None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(saved["data"]["id"], MOCK_ID.to_string());
        assert_eq!(saved["data"]["token"], "TK-9");
        assert_eq!(saved["data"]["interviewee_name"], "Bu Ani");

        let (status, _) = send(&app, "GET", &format!("/api/admin/recorder/sessions/{id}"), Some(token.as_str()), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_saves_store_one_recording() {
        let app = test_app();
        let token = login(&app, "admin", "admin123").await;

        let (_, session) = send(
            &app,
            "POST",
            "/api/admin/recorder/sessions",
            Some(token.as_str()),
            Some(json!({ "interviewee_name": "Pak Budi" })),
        )
        .await;
        let id = session["id"].as_str().unwrap().to_string();
        send(&app, "POST", &format!("/api/admin/recorder/sessions/{id}/stop"), Some(token.as_str()), None).await;

        let uri = format!("/api/admin/recorder/sessions/{id}/save");
        let (first, second) = tokio::join!(
            send(&app, "POST", &uri, Some(token.as_str()), None),
            send(&app, "POST", &uri, Some(token.as_str()), None),
        );
        let statuses = [first.0, second.0];
        assert_eq!(statuses.iter().filter(|s| **s == StatusCode::CREATED).count(), 1);
        assert!(statuses
            .iter()
            .any(|s| *s == StatusCode::CONFLICT || *s == StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn abandoned_session_can_be_discarded() {
        let app = test_app();
        let token = login(&app, "admin", "admin123").await;

        let (status, session) = send(&app, "POST", "/api/admin/recorder/sessions", Some(token.as_str()), None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(session["interviewee_name"], "");
        let uri = format!("/api/admin/recorder/sessions/{}", session["id"].as_str().unwrap());

        let (status, _) = send(&app, "DELETE", &uri, Some(token.as_str()), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "GET", &uri, Some(token.as_str()), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_start_body_is_bad_request() {
        let app = test_app();
        let token = login(&app, "admin", "admin123").await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/admin/recorder/sessions")
            .header("authorization", format!("Bearer {}", token))
            .header("content-type", "application/json")
            .body(Body::from("{\"interviewee_name\": "))
            .unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn recording_update_echoes_sent_fields_offline() {
        let app = test_app();
        let token = login(&app, "admin", "admin123").await;
        let id = uuid::Uuid::new_v4();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/admin/interview-recordings/{}", id),
            Some(token.as_str()),
            Some(json!({ "transcription": "Transkrip disunting" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": id.to_string(), "transcription": "Transkrip disunting" }));
    }
}
