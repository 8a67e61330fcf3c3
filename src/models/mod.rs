pub mod dashboard;
pub mod early_warning;
pub mod interview_recording;
pub mod interview_request;
pub mod press_release;
pub mod user;
pub mod weather;

use thiserror::Error;

// Valor de texto que no corresponde a ninguna variante de un enum de la base
#[derive(Debug, Error)]
#[error("valor desconocido para {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}
