use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::ParseEnumError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningLevel {
    Rendah,
    Sedang,
    Tinggi,
}

impl WarningLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningLevel::Rendah => "Rendah",
            WarningLevel::Sedang => "Sedang",
            WarningLevel::Tinggi => "Tinggi",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            WarningLevel::Tinggi => "bg-red-100 text-red-800",
            WarningLevel::Sedang => "bg-yellow-100 text-yellow-800",
            WarningLevel::Rendah => "bg-green-100 text-green-800",
        }
    }
}

impl TryFrom<String> for WarningLevel {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Rendah" => Ok(WarningLevel::Rendah),
            "Sedang" => Ok(WarningLevel::Sedang),
            "Tinggi" => Ok(WarningLevel::Tinggi),
            _ => Err(ParseEnumError { kind: "warning_level", value }),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, FromRow)]
pub struct EarlyWarning {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub warning_level: WarningLevel,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EarlyWarningView {
    #[serde(flatten)]
    pub warning: EarlyWarning,
    pub level_color: &'static str,
}

impl From<EarlyWarning> for EarlyWarningView {
    fn from(warning: EarlyWarning) -> Self {
        let level_color = warning.warning_level.color();
        EarlyWarningView { warning, level_color }
    }
}
