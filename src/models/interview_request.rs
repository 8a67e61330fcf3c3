use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::ParseEnumError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewMethod {
    Phone,
    Whatsapp,
    Inperson,
    Virtual,
}

impl InterviewMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewMethod::Phone => "phone",
            InterviewMethod::Whatsapp => "whatsapp",
            InterviewMethod::Inperson => "inperson",
            InterviewMethod::Virtual => "virtual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InterviewMethod::Virtual => "Virtual Meeting",
            InterviewMethod::Phone => "Telepon",
            InterviewMethod::Whatsapp => "WhatsApp",
            InterviewMethod::Inperson => "Langsung",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            InterviewMethod::Virtual => "bg-blue-100 text-blue-800",
            InterviewMethod::Phone => "bg-purple-100 text-purple-800",
            InterviewMethod::Whatsapp => "bg-green-100 text-green-800",
            InterviewMethod::Inperson => "bg-orange-100 text-orange-800",
        }
    }
}

impl TryFrom<String> for InterviewMethod {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "phone" => Ok(InterviewMethod::Phone),
            "whatsapp" => Ok(InterviewMethod::Whatsapp),
            "inperson" => Ok(InterviewMethod::Inperson),
            "virtual" => Ok(InterviewMethod::Virtual),
            _ => Err(ParseEnumError { kind: "interview_method", value }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Pending,
    Approved,
    Completed,
    Cancelled,
}

impl InterviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewStatus::Pending => "pending",
            InterviewStatus::Approved => "approved",
            InterviewStatus::Completed => "completed",
            InterviewStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InterviewStatus::Completed => "Selesai",
            InterviewStatus::Pending => "Pending",
            InterviewStatus::Cancelled => "Dibatalkan",
            InterviewStatus::Approved => "Disetujui",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            InterviewStatus::Completed => "bg-green-100 text-green-800",
            InterviewStatus::Pending => "bg-yellow-100 text-yellow-800",
            InterviewStatus::Cancelled => "bg-red-100 text-red-800",
            InterviewStatus::Approved => "bg-blue-100 text-blue-800",
        }
    }
}

impl TryFrom<String> for InterviewStatus {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "pending" => Ok(InterviewStatus::Pending),
            "approved" => Ok(InterviewStatus::Approved),
            "completed" => Ok(InterviewStatus::Completed),
            "cancelled" => Ok(InterviewStatus::Cancelled),
            _ => Err(ParseEnumError { kind: "status", value }),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, FromRow)]
pub struct InterviewRequest {
    pub id: Uuid,
    pub interviewer_name: String,
    pub media_name: String,
    pub topic: String,
    #[sqlx(try_from = "String")]
    pub interview_method: InterviewMethod,
    pub interview_datetime: NaiveDateTime,
    pub virtual_link: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: InterviewStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Lo que envía el formulario público. El estado no se acepta: siempre nace "pending".
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInterviewRequestSchema {
    pub interviewer_name: String,
    pub media_name: String,
    pub topic: String,
    pub interview_method: InterviewMethod,
    #[serde(deserialize_with = "deserialize_local_datetime")]
    pub interview_datetime: NaiveDateTime,
    pub virtual_link: Option<String>,
    pub notes: Option<String>,
}

// Los campos datetime-local del navegador llegan sin segundos ("2024-01-15T10:00")
fn deserialize_local_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M"))
        .map_err(serde::de::Error::custom)
}

impl CreateInterviewRequestSchema {
    /// El enlace solo se conserva para el método virtual y cuando no está vacío.
    pub fn normalized(mut self) -> Self {
        self.virtual_link = match self.interview_method {
            InterviewMethod::Virtual => self.virtual_link.filter(|link| !link.trim().is_empty()),
            _ => None,
        };
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusSchema {
    pub status: InterviewStatus,
    pub notes: Option<String>,
}

/// Resultado de un cambio de estado: id, estado, notas y marcas de tiempo.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StatusChange {
    pub id: Uuid,
    #[sqlx(try_from = "String")]
    pub status: InterviewStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
