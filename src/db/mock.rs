use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::{Store, StoreError};
use crate::models::{
    dashboard::DashboardStats,
    early_warning::{EarlyWarning, WarningLevel},
    interview_recording::{CreateRecordingSchema, InterviewRecording, UpdateRecordingSchema, UpdatedRecording},
    interview_request::{CreateInterviewRequestSchema, InterviewRequest, InterviewStatus, StatusChange},
    press_release::{CreatePressReleaseSchema, PressRelease},
    user::{User, UserType},
    weather::{UpsertWeatherSchema, WeatherData},
};

/// Id de todo lo que "crea" el modo offline. Nunca se persiste.
pub const MOCK_ID: Uuid = Uuid::nil();

/// Datos fijos para trabajar sin base de datos. No guarda nada entre llamadas.
#[derive(Debug, Default)]
pub struct MockStore;

impl MockStore {
    pub fn new() -> Self {
        Self
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn placeholder_press_releases() -> Vec<PressRelease> {
    let now = Utc::now();
    let rows = [
        (
            1,
            "Konferensi Pers Menteri Lingkungan Hidup",
            "Pembahasan kebijakan baru tentang pengelolaan sampah plastik di Indonesia.",
            "Lingkungan",
            date(2024, 1, 15),
        ),
        (
            2,
            "Peluncuran Program Digitalisasi UMKM",
            "Pemerintah meluncurkan program bantuan digitalisasi untuk UMKM se-Indonesia.",
            "Ekonomi",
            date(2024, 1, 14),
        ),
        (
            3,
            "Update Situasi Cuaca Ekstrem",
            "BMKG memberikan update terkini mengenai kondisi cuaca ekstrem di beberapa wilayah.",
            "Cuaca",
            date(2024, 1, 13),
        ),
    ];

    rows.into_iter()
        .map(|(id, title, excerpt, category, published_date)| PressRelease {
            id: Uuid::from_u128(id),
            title: title.to_string(),
            excerpt: Some(excerpt.to_string()),
            content: None,
            category: Some(category.to_string()),
            published_date,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

fn placeholder_weather() -> Vec<WeatherData> {
    let now = Utc::now();
    vec![WeatherData {
        id: Uuid::from_u128(0x77),
        location: "Jakarta".to_string(),
        temperature: Some(28.0),
        condition: Some("Cerah berawan".to_string()),
        humidity: Some(65.0),
        wind_speed: Some(12.0),
        pressure: Some(1013.0),
        forecast_date: now.date_naive(),
        created_at: now,
    }]
}

fn placeholder_warnings() -> Vec<EarlyWarning> {
    let now = Utc::now();
    vec![EarlyWarning {
        id: Uuid::from_u128(0xa1),
        title: "Peringatan Cuaca Ekstrem".to_string(),
        description: Some("Potensi hujan lebat di wilayah Jabodetabek".to_string()),
        warning_level: WarningLevel::Sedang,
        image_url: Some("/placeholder.svg?height=200&width=300".to_string()),
        is_active: true,
        created_at: now,
        updated_at: now,
    }]
}

fn placeholder_user(username: &str) -> Option<User> {
    let (id, user_type, full_name) = match username {
        "admin" => (0x1001, UserType::Admin, "Administrator"),
        "user" => (0x1002, UserType::User, "Pengguna Demo"),
        _ => return None,
    };
    let now = Utc::now();
    Some(User {
        id: Uuid::from_u128(id),
        username: username.to_string(),
        user_type,
        full_name: Some(full_name.to_string()),
        email: None,
        created_at: now,
        updated_at: now,
    })
}

#[async_trait]
impl Store for MockStore {
    fn is_mock(&self) -> bool {
        true
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(placeholder_user(username))
    }

    async fn press_releases(&self) -> Vec<PressRelease> {
        placeholder_press_releases()
    }

    async fn create_press_release(&self, input: CreatePressReleaseSchema) -> Result<PressRelease, StoreError> {
        let now = Utc::now();
        Ok(PressRelease {
            id: MOCK_ID,
            title: input.title,
            excerpt: input.excerpt,
            content: input.content,
            category: input.category,
            published_date: input.published_date,
            created_at: now,
            updated_at: now,
        })
    }

    async fn weather_today(&self) -> Vec<WeatherData> {
        placeholder_weather()
    }

    async fn upsert_weather(&self, location: &str, input: UpsertWeatherSchema) -> Result<WeatherData, StoreError> {
        let now = Utc::now();
        Ok(WeatherData {
            id: MOCK_ID,
            location: location.to_string(),
            temperature: input.temperature,
            condition: input.condition,
            humidity: input.humidity,
            wind_speed: input.wind_speed,
            pressure: input.pressure,
            forecast_date: now.date_naive(),
            created_at: now,
        })
    }

    async fn active_early_warnings(&self) -> Vec<EarlyWarning> {
        placeholder_warnings()
    }

    async fn interview_requests(&self) -> Vec<InterviewRequest> {
        Vec::new()
    }

    async fn create_interview_request(
        &self,
        input: CreateInterviewRequestSchema,
    ) -> Result<InterviewRequest, StoreError> {
        let input = input.normalized();
        let now = Utc::now();
        Ok(InterviewRequest {
            id: MOCK_ID,
            interviewer_name: input.interviewer_name,
            media_name: input.media_name,
            topic: input.topic,
            interview_method: input.interview_method,
            interview_datetime: input.interview_datetime,
            virtual_link: input.virtual_link,
            status: InterviewStatus::Pending,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update_interview_request_status(
        &self,
        id: Uuid,
        status: InterviewStatus,
        notes: Option<String>,
    ) -> Result<StatusChange, StoreError> {
        let now = Utc::now();
        Ok(StatusChange { id, status, notes, created_at: now, updated_at: now })
    }

    async fn interview_recordings(&self) -> Vec<InterviewRecording> {
        Vec::new()
    }

    async fn create_interview_recording(
        &self,
        input: CreateRecordingSchema,
    ) -> Result<InterviewRecording, StoreError> {
        let now = Utc::now();
        Ok(InterviewRecording {
            id: MOCK_ID,
            interview_request_id: input.interview_request_id,
            token: input.token,
            interviewee_name: input.interviewee_name,
            recording_duration: input.recording_duration,
            transcription: input.transcription,
            audio_file_url: input.audio_file_url,
            pdf_file_url: input.pdf_file_url,
            recorded_by: input.recorded_by,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update_interview_recording(
        &self,
        id: Uuid,
        patch: UpdateRecordingSchema,
    ) -> Result<UpdatedRecording, StoreError> {
        Ok(UpdatedRecording::Echo { id, changes: patch })
    }

    async fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interview_request::InterviewMethod;
    use chrono::NaiveDateTime;

    #[tokio::test]
    async fn reads_return_fixed_placeholders() {
        let store = MockStore::new();

        let releases = store.press_releases().await;
        assert_eq!(releases.len(), 3);
        assert_eq!(releases[0].title, "Konferensi Pers Menteri Lingkungan Hidup");

        let weather = store.weather_today().await;
        assert_eq!(weather.len(), 1);
        assert_eq!(weather[0].location, "Jakarta");
        assert_eq!(weather[0].forecast_date, Utc::now().date_naive());

        let warnings = store.active_early_warnings().await;
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].warning_level, WarningLevel::Sedang);

        assert!(store.interview_requests().await.is_empty());
        assert!(store.interview_recordings().await.is_empty());
        assert_eq!(store.dashboard_stats().await, DashboardStats::default());
    }

    #[tokio::test]
    async fn writes_echo_input_with_unpersisted_id() {
        let store = MockStore::new();

        let release = store
            .create_press_release(CreatePressReleaseSchema {
                title: "Rilis".into(),
                excerpt: None,
                content: Some("Isi".into()),
                category: None,
                published_date: date(2024, 2, 1),
            })
            .await
            .unwrap();
        assert_eq!(release.id, MOCK_ID);
        assert_eq!(release.content.as_deref(), Some("Isi"));

        let weather = store
            .upsert_weather("Surabaya", UpsertWeatherSchema { temperature: Some(30.0), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(weather.id, MOCK_ID);
        assert_eq!(weather.location, "Surabaya");

        let recording = store
            .create_interview_recording(CreateRecordingSchema {
                interviewee_name: "Budi".into(),
                recording_duration: Some(42),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(recording.id, MOCK_ID);
        assert_eq!(recording.recording_duration, Some(42));
    }

    #[tokio::test]
    async fn recording_update_echoes_only_sent_fields() {
        let store = MockStore::new();
        let id = Uuid::from_u128(42);
        let updated = store
            .update_interview_recording(
                id,
                UpdateRecordingSchema { transcription: Some("Transkrip final".into()), ..Default::default() },
            )
            .await
            .unwrap();

        match updated {
            UpdatedRecording::Echo { id: echoed, changes } => {
                assert_eq!(echoed, id);
                assert_eq!(changes.transcription.as_deref(), Some("Transkrip final"));
                assert!(changes.interviewee_name.is_none());
            }
            UpdatedRecording::Stored(_) => panic!("el modo offline no devuelve filas guardadas"),
        }
    }

    #[tokio::test]
    async fn created_request_is_always_pending() {
        let store = MockStore::new();
        let request = store
            .create_interview_request(CreateInterviewRequestSchema {
                interviewer_name: "Rina".into(),
                media_name: "Tempo".into(),
                topic: "Gempa".into(),
                interview_method: InterviewMethod::Phone,
                interview_datetime: NaiveDateTime::parse_from_str("2024-03-01T09:30:00", "%Y-%m-%dT%H:%M:%S")
                    .unwrap(),
                virtual_link: Some("https://meet.example/x".into()),
                notes: None,
            })
            .await
            .unwrap();
        assert_eq!(request.status, InterviewStatus::Pending);
        assert_eq!(request.id, MOCK_ID);
        assert_eq!(request.virtual_link, None);
    }

    #[tokio::test]
    async fn only_demo_users_exist() {
        let store = MockStore::new();
        let admin = store.find_user_by_username("admin").await.unwrap().unwrap();
        assert_eq!(admin.user_type, UserType::Admin);
        assert!(store.find_user_by_username("ghost").await.unwrap().is_none());
    }
}
