use std::{env, time::Duration};

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TRANSCRIPTION_DELAY_MS: u64 = 2000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} inválido: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Conexión al almacén remoto. Solo existe cuando ambas variables están presentes.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub store: Option<StoreSettings>,
    pub jwt_secret: String,
    pub transcription_delay: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());
        let anon_key = lookup("DATABASE_ANON_KEY").filter(|v| !v.trim().is_empty());
        let store = match (url, anon_key) {
            (Some(url), Some(anon_key)) => Some(StoreSettings { url, anon_key }),
            _ => None,
        };

        let jwt_secret = match lookup("JWT_SECRET").filter(|v| !v.is_empty()) {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET no definido, se usa un secreto aleatorio por proceso");
                uuid::Uuid::new_v4().simple().to_string()
            }
        };

        let delay_ms = match lookup("TRANSCRIPTION_DELAY_MS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "TRANSCRIPTION_DELAY_MS",
                value: raw,
            })?,
            None => DEFAULT_TRANSCRIPTION_DELAY_MS,
        };

        Ok(Self {
            port,
            store,
            jwt_secret,
            transcription_delay: Duration::from_millis(delay_ms),
        })
    }
}
