use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, Serialize, FromRow)]
pub struct InterviewRecording {
    pub id: Uuid,
    pub interview_request_id: Option<Uuid>,
    pub token: Option<String>,
    pub interviewee_name: String,
    pub recording_duration: Option<i32>,
    pub transcription: Option<String>,
    pub audio_file_url: Option<String>,
    pub pdf_file_url: Option<String>,
    pub recorded_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRecordingSchema {
    pub interview_request_id: Option<Uuid>,
    pub token: Option<String>,
    pub interviewee_name: String,
    pub recording_duration: Option<i32>,
    pub transcription: Option<String>,
    pub audio_file_url: Option<String>,
    pub pdf_file_url: Option<String>,
    pub recorded_by: Option<String>,
}

// Campos ausentes se dejan como están en la base (COALESCE)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateRecordingSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_request_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interviewee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_by: Option<String>,
}

/// Resultado de editar una grabación. Sin base de datos solo se devuelve
/// el id junto a los campos enviados.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UpdatedRecording {
    Stored(InterviewRecording),
    Echo {
        id: Uuid,
        #[serde(flatten)]
        changes: UpdateRecordingSchema,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn echo_lists_only_sent_fields() {
        let id = Uuid::from_u128(7);
        let echo = UpdatedRecording::Echo {
            id,
            changes: UpdateRecordingSchema {
                transcription: Some("Teks revisi".into()),
                ..Default::default()
            },
        };
        assert_eq!(
            serde_json::to_value(&echo).unwrap(),
            json!({ "id": id.to_string(), "transcription": "Teks revisi" })
        );
    }
}
