mod mock;
mod postgres;

use std::{str::FromStr, sync::Arc};

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    config::StoreSettings,
    models::{
        dashboard::DashboardStats,
        early_warning::EarlyWarning,
        interview_recording::{CreateRecordingSchema, InterviewRecording, UpdateRecordingSchema, UpdatedRecording},
        interview_request::{CreateInterviewRequestSchema, InterviewRequest, InterviewStatus, StatusChange},
        press_release::{CreatePressReleaseSchema, PressRelease},
        user::User,
        weather::{UpsertWeatherSchema, WeatherData},
    },
};

pub use mock::{MockStore, MOCK_ID};
pub use postgres::PgStore;

// Alias del almacén compartido por todos los handlers
pub type DbStore = Arc<dyn Store>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No se pudo {operation}: {message}")]
    Query { operation: &'static str, message: String },

    #[error("{entity} {id} no encontrado")]
    NotFound { entity: &'static str, id: Uuid },
}

#[derive(Debug, Error)]
pub enum StoreInitError {
    #[error("Error al conectar a la Base de Datos: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("Error aplicando migraciones: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Capa de acceso a datos. Una operación por tabla.
///
/// Las lecturas nunca fallan hacia afuera: si el almacén responde con error
/// se registra y se devuelve una colección vacía. Las escrituras devuelven
/// el error con el mensaje del almacén.
#[async_trait]
pub trait Store: Send + Sync {
    fn is_mock(&self) -> bool;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn press_releases(&self) -> Vec<PressRelease>;
    async fn create_press_release(&self, input: CreatePressReleaseSchema) -> Result<PressRelease, StoreError>;

    async fn weather_today(&self) -> Vec<WeatherData>;
    async fn upsert_weather(&self, location: &str, input: UpsertWeatherSchema) -> Result<WeatherData, StoreError>;

    async fn active_early_warnings(&self) -> Vec<EarlyWarning>;

    async fn interview_requests(&self) -> Vec<InterviewRequest>;
    async fn create_interview_request(
        &self,
        input: CreateInterviewRequestSchema,
    ) -> Result<InterviewRequest, StoreError>;
    async fn update_interview_request_status(
        &self,
        id: Uuid,
        status: InterviewStatus,
        notes: Option<String>,
    ) -> Result<StatusChange, StoreError>;

    async fn interview_recordings(&self) -> Vec<InterviewRecording>;
    async fn create_interview_recording(
        &self,
        input: CreateRecordingSchema,
    ) -> Result<InterviewRecording, StoreError>;
    async fn update_interview_recording(
        &self,
        id: Uuid,
        patch: UpdateRecordingSchema,
    ) -> Result<UpdatedRecording, StoreError>;

    async fn dashboard_stats(&self) -> DashboardStats;
}

/// Elige la implementación al arrancar: Postgres si hay configuración, mock si no.
pub async fn init_store(settings: Option<&StoreSettings>) -> Result<DbStore, StoreInitError> {
    let Some(settings) = settings else {
        tracing::warn!("DATABASE_URL / DATABASE_ANON_KEY no definidos, usando datos de ejemplo (modo offline)");
        return Ok(Arc::new(MockStore::new()));
    };

    let options = PgConnectOptions::from_str(&settings.url)?.password(&settings.anon_key);

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(Arc::new(PgStore::new(pool)))
}
