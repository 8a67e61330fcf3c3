use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::{Store, StoreError};
use crate::models::{
    dashboard::DashboardStats,
    early_warning::EarlyWarning,
    interview_recording::{CreateRecordingSchema, InterviewRecording, UpdateRecordingSchema, UpdatedRecording},
    interview_request::{CreateInterviewRequestSchema, InterviewRequest, InterviewStatus, StatusChange},
    press_release::{CreatePressReleaseSchema, PressRelease},
    user::User,
    weather::{UpsertWeatherSchema, WeatherData},
};

pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn rows_or_empty<T>(result: Result<Vec<T>, sqlx::Error>, what: &str) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Error obteniendo {}: {:?}", what, e);
            Vec::new()
        }
    }
}

fn write_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |e| StoreError::Query { operation, message: e.to_string() }
}

fn update_error(entity: &'static str, operation: &'static str, id: Uuid) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |e| match e {
        sqlx::Error::RowNotFound => StoreError::NotFound { entity, id },
        other => StoreError::Query { operation, message: other.to_string() },
    }
}

#[async_trait]
impl Store for PgStore {
    fn is_mock(&self) -> bool {
        false
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, user_type, full_name, email, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(write_error("buscar usuario"))
    }

    async fn press_releases(&self) -> Vec<PressRelease> {
        let result = sqlx::query_as::<_, PressRelease>(
            r#"
            SELECT id, title, excerpt, content, category, published_date, created_at, updated_at
            FROM press_releases
            ORDER BY published_date DESC
            LIMIT 10
            "#,
        )
        .fetch_all(&self.pool)
        .await;

        rows_or_empty(result, "comunicados de prensa")
    }

    async fn create_press_release(&self, input: CreatePressReleaseSchema) -> Result<PressRelease, StoreError> {
        sqlx::query_as::<_, PressRelease>(
            r#"
            INSERT INTO press_releases (title, excerpt, content, category, published_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, excerpt, content, category, published_date, created_at, updated_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.excerpt)
        .bind(&input.content)
        .bind(&input.category)
        .bind(input.published_date)
        .fetch_one(&self.pool)
        .await
        .map_err(write_error("crear comunicado de prensa"))
    }

    async fn weather_today(&self) -> Vec<WeatherData> {
        let result = sqlx::query_as::<_, WeatherData>(
            r#"
            SELECT id, location, temperature, condition, humidity, wind_speed, pressure, forecast_date, created_at
            FROM weather_data
            WHERE forecast_date = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(Utc::now().date_naive())
        .fetch_all(&self.pool)
        .await;

        rows_or_empty(result, "datos del clima")
    }

    async fn upsert_weather(&self, location: &str, input: UpsertWeatherSchema) -> Result<WeatherData, StoreError> {
        // Una fila por ubicación y día; los campos no enviados conservan su valor
        sqlx::query_as::<_, WeatherData>(
            r#"
            INSERT INTO weather_data (location, temperature, condition, humidity, wind_speed, pressure, forecast_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (location, forecast_date) DO UPDATE SET
                temperature = COALESCE(EXCLUDED.temperature, weather_data.temperature),
                condition = COALESCE(EXCLUDED.condition, weather_data.condition),
                humidity = COALESCE(EXCLUDED.humidity, weather_data.humidity),
                wind_speed = COALESCE(EXCLUDED.wind_speed, weather_data.wind_speed),
                pressure = COALESCE(EXCLUDED.pressure, weather_data.pressure)
            RETURNING id, location, temperature, condition, humidity, wind_speed, pressure, forecast_date, created_at
            "#,
        )
        .bind(location)
        .bind(input.temperature)
        .bind(&input.condition)
        .bind(input.humidity)
        .bind(input.wind_speed)
        .bind(input.pressure)
        .bind(Utc::now().date_naive())
        .fetch_one(&self.pool)
        .await
        .map_err(write_error("actualizar datos del clima"))
    }

    async fn active_early_warnings(&self) -> Vec<EarlyWarning> {
        let result = sqlx::query_as::<_, EarlyWarning>(
            r#"
            SELECT id, title, description, warning_level, image_url, is_active, created_at, updated_at
            FROM early_warnings
            WHERE is_active = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;

        rows_or_empty(result, "alertas tempranas")
    }

    async fn interview_requests(&self) -> Vec<InterviewRequest> {
        let result = sqlx::query_as::<_, InterviewRequest>(
            r#"
            SELECT id, interviewer_name, media_name, topic, interview_method, interview_datetime,
                   virtual_link, status, notes, created_at, updated_at
            FROM interview_requests
            ORDER BY interview_datetime DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;

        rows_or_empty(result, "solicitudes de entrevista")
    }

    async fn create_interview_request(
        &self,
        input: CreateInterviewRequestSchema,
    ) -> Result<InterviewRequest, StoreError> {
        let input = input.normalized();

        sqlx::query_as::<_, InterviewRequest>(
            r#"
            INSERT INTO interview_requests (
                interviewer_name, media_name, topic, interview_method,
                interview_datetime, virtual_link, status, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, interviewer_name, media_name, topic, interview_method, interview_datetime,
                      virtual_link, status, notes, created_at, updated_at
            "#,
        )
        .bind(&input.interviewer_name)
        .bind(&input.media_name)
        .bind(&input.topic)
        .bind(input.interview_method.as_str())
        .bind(input.interview_datetime)
        .bind(&input.virtual_link)
        .bind(InterviewStatus::Pending.as_str())
        .bind(&input.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(write_error("crear solicitud de entrevista"))
    }

    async fn update_interview_request_status(
        &self,
        id: Uuid,
        status: InterviewStatus,
        notes: Option<String>,
    ) -> Result<StatusChange, StoreError> {
        sqlx::query_as::<_, StatusChange>(
            r#"
            UPDATE interview_requests SET
                status = $1,
                notes = COALESCE($2, notes),
                updated_at = NOW()
            WHERE id = $3
            RETURNING id, status, notes, created_at, updated_at
            "#,
        )
        .bind(status.as_str())
        .bind(notes)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(update_error("Solicitud", "actualizar solicitud de entrevista", id))
    }

    async fn interview_recordings(&self) -> Vec<InterviewRecording> {
        let result = sqlx::query_as::<_, InterviewRecording>(
            r#"
            SELECT id, interview_request_id, token, interviewee_name, recording_duration, transcription,
                   audio_file_url, pdf_file_url, recorded_by, created_at, updated_at
            FROM interview_recordings
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;

        rows_or_empty(result, "grabaciones de entrevista")
    }

    async fn create_interview_recording(
        &self,
        input: CreateRecordingSchema,
    ) -> Result<InterviewRecording, StoreError> {
        sqlx::query_as::<_, InterviewRecording>(
            r#"
            INSERT INTO interview_recordings (
                interview_request_id, token, interviewee_name, recording_duration,
                transcription, audio_file_url, pdf_file_url, recorded_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, interview_request_id, token, interviewee_name, recording_duration, transcription,
                      audio_file_url, pdf_file_url, recorded_by, created_at, updated_at
            "#,
        )
        .bind(input.interview_request_id)
        .bind(&input.token)
        .bind(&input.interviewee_name)
        .bind(input.recording_duration)
        .bind(&input.transcription)
        .bind(&input.audio_file_url)
        .bind(&input.pdf_file_url)
        .bind(&input.recorded_by)
        .fetch_one(&self.pool)
        .await
        .map_err(write_error("crear grabación de entrevista"))
    }

    async fn update_interview_recording(
        &self,
        id: Uuid,
        patch: UpdateRecordingSchema,
    ) -> Result<UpdatedRecording, StoreError> {
        sqlx::query_as::<_, InterviewRecording>(
            r#"
            UPDATE interview_recordings SET
                interview_request_id = COALESCE($1, interview_request_id),
                token = COALESCE($2, token),
                interviewee_name = COALESCE($3, interviewee_name),
                recording_duration = COALESCE($4, recording_duration),
                transcription = COALESCE($5, transcription),
                audio_file_url = COALESCE($6, audio_file_url),
                pdf_file_url = COALESCE($7, pdf_file_url),
                recorded_by = COALESCE($8, recorded_by),
                updated_at = NOW()
            WHERE id = $9
            RETURNING id, interview_request_id, token, interviewee_name, recording_duration, transcription,
                      audio_file_url, pdf_file_url, recorded_by, created_at, updated_at
            "#,
        )
        .bind(patch.interview_request_id)
        .bind(&patch.token)
        .bind(&patch.interviewee_name)
        .bind(patch.recording_duration)
        .bind(&patch.transcription)
        .bind(&patch.audio_file_url)
        .bind(&patch.pdf_file_url)
        .bind(&patch.recorded_by)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map(UpdatedRecording::Stored)
        .map_err(update_error("Grabación", "actualizar grabación de entrevista", id))
    }

    async fn dashboard_stats(&self) -> DashboardStats {
        let result = sqlx::query_as::<_, DashboardStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM interview_requests) AS total_interviews,
                (SELECT COUNT(*) FROM interview_requests WHERE status = 'completed') AS completed_interviews,
                (SELECT COUNT(*) FROM interview_requests WHERE status = 'pending') AS pending_interviews,
                (SELECT COUNT(*) FROM interview_recordings) AS total_recordings,
                (SELECT COUNT(*) FROM press_releases) AS total_press_releases
            "#,
        )
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(stats) => stats,
            Err(e) => {
                tracing::error!("Error obteniendo estadísticas del panel: {:?}", e);
                DashboardStats::default()
            }
        }
    }
}
