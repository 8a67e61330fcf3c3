use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::{sync::RwLock, time::Instant};
use uuid::Uuid;

use crate::models::interview_recording::CreateRecordingSchema;

const FALLBACK_INTERVIEWEE: &str = "narasumber";
// Sesiones sin actividad durante este tiempo se descartan al iniciar otra
const SESSION_IDLE_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Transcripción simulada. El audio nunca se procesa: el texto es siempre esta plantilla.
pub fn simulated_transcript(interviewee_name: &str, date: NaiveDate) -> String {
    let name = match interviewee_name.trim() {
        "" => FALLBACK_INTERVIEWEE,
        name => name,
    };
    // Formato de fecha id-ID: d/m/aaaa
    let date = format!("{}/{}/{}", date.day(), date.month(), date.year());

    format!(
        "Hasil wawancara dengan {name} pada {date}. \n\
         \n\
         Topik: [Topik wawancara akan muncul di sini]\n\
         \n\
         Transkrip:\n\
         Pewawancara: Selamat pagi, terima kasih sudah meluangkan waktu untuk wawancara ini.\n\
         Narasumber: Selamat pagi, terima kasih juga atas kesempatannya.\n\
         \n\
         [Ini adalah contoh hasil konversi speech-to-text dari rekaman wawancara. Dalam implementasi nyata, \
         ini akan menggunakan API speech-to-text seperti Google Speech API atau Azure Speech Services untuk mengkonversi audio menjadi teks secara real-time.]\n\
         \n\
         Pewawancara: Bagaimana pandangan Anda mengenai topik yang sedang kita bahas?\n\
         Narasumber: Menurut saya, hal ini sangat penting untuk diperhatikan...\n\
         \n\
         [Transkrip akan berlanjut sesuai dengan isi rekaman audio]"
    )
}

/// Reloj mm:ss de la grabación.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecorderError {
    #[error("sesión {0} no encontrada")]
    NotFound(Uuid),
    #[error("la sesión ya está detenida")]
    AlreadyStopped,
    #[error("la sesión sigue grabando")]
    StillRecording,
    #[error("falta el nombre del entrevistado")]
    MissingIntervieweeName,
    #[error("la sesión ya se está guardando")]
    SaveInProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Recording,
    Paused,
    Stopped,
    Saving,
}

#[derive(Debug)]
struct Session {
    token: Option<String>,
    interviewee_name: String,
    owner: Uuid,
    state: SessionState,
    accumulated: Duration,
    resumed_at: Option<Instant>,
    transcription: Option<String>,
    transcription_pending: bool,
    last_touched: Instant,
}

impl Session {
    fn elapsed(&self) -> Duration {
        match self.resumed_at {
            Some(since) => self.accumulated + since.elapsed(),
            None => self.accumulated,
        }
    }

    // Congela el reloj sumando el tramo en curso
    fn freeze_clock(&mut self) {
        if let Some(since) = self.resumed_at.take() {
            self.accumulated += since.elapsed();
        }
    }

    fn view(&self, id: Uuid) -> SessionView {
        let elapsed_seconds = self.elapsed().as_secs();
        SessionView {
            id,
            token: self.token.clone(),
            interviewee_name: self.interviewee_name.clone(),
            state: self.state,
            elapsed_seconds,
            clock: format_clock(elapsed_seconds),
            transcription: self.transcription.clone(),
            transcription_pending: self.transcription_pending,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub token: Option<String>,
    pub interviewee_name: String,
    pub state: SessionState,
    pub elapsed_seconds: u64,
    pub clock: String,
    pub transcription: Option<String>,
    pub transcription_pending: bool,
}

/// Campos editables de una sesión; los ausentes no cambian.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct SessionUpdate {
    pub token: Option<String>,
    pub interviewee_name: Option<String>,
    pub transcription: Option<String>,
}

/// Sesiones de grabación en memoria.
#[derive(Clone)]
pub struct Recorder {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    transcription_delay: Duration,
}

impl Recorder {
    pub fn new(transcription_delay: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            transcription_delay,
        }
    }

    pub async fn start(&self, token: Option<String>, interviewee_name: String, owner: Uuid) -> SessionView {
        let id = Uuid::new_v4();
        let session = Session {
            token: token.filter(|t| !t.is_empty()),
            interviewee_name,
            owner,
            state: SessionState::Recording,
            accumulated: Duration::ZERO,
            resumed_at: Some(Instant::now()),
            transcription: None,
            transcription_pending: false,
            last_touched: Instant::now(),
        };
        let view = session.view(id);

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.state == SessionState::Saving || s.last_touched.elapsed() < SESSION_IDLE_TTL);
        if sessions.len() < before {
            tracing::info!("{} sesiones de grabación inactivas descartadas", before - sessions.len());
        }
        sessions.insert(id, session);
        tracing::debug!("Grabación {} iniciada", id);
        view
    }

    pub async fn get(&self, id: Uuid) -> Result<SessionView, RecorderError> {
        let sessions = self.sessions.read().await;
        sessions.get(&id).map(|s| s.view(id)).ok_or(RecorderError::NotFound(id))
    }

    /// Pausa o reanuda según el estado actual.
    pub async fn toggle_pause(&self, id: Uuid) -> Result<SessionView, RecorderError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(RecorderError::NotFound(id))?;

        match session.state {
            SessionState::Recording => {
                session.freeze_clock();
                session.state = SessionState::Paused;
            }
            SessionState::Paused => {
                session.resumed_at = Some(Instant::now());
                session.state = SessionState::Recording;
            }
            SessionState::Stopped | SessionState::Saving => return Err(RecorderError::AlreadyStopped),
        }
        session.last_touched = Instant::now();

        Ok(session.view(id))
    }

    /// Detiene la captura. Tras el retardo fijo aparece la transcripción simulada.
    pub async fn stop(&self, id: Uuid) -> Result<SessionView, RecorderError> {
        let view = {
            let mut sessions = self.sessions.write().await;
            let session = sessions.get_mut(&id).ok_or(RecorderError::NotFound(id))?;
            if matches!(session.state, SessionState::Stopped | SessionState::Saving) {
                return Err(RecorderError::AlreadyStopped);
            }
            session.freeze_clock();
            session.state = SessionState::Stopped;
            session.transcription_pending = true;
            session.last_touched = Instant::now();
            session.view(id)
        };

        let text = simulated_transcript(&view.interviewee_name, Utc::now().date_naive());
        let sessions = Arc::clone(&self.sessions);
        let delay = self.transcription_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // La sesión pudo guardarse o descartarse mientras tanto
            if let Some(session) = sessions.write().await.get_mut(&id) {
                session.transcription = Some(text);
                session.transcription_pending = false;
            }
        });

        Ok(view)
    }

    pub async fn update(&self, id: Uuid, update: SessionUpdate) -> Result<SessionView, RecorderError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(RecorderError::NotFound(id))?;
        if session.state == SessionState::Saving {
            return Err(RecorderError::SaveInProgress);
        }

        if let Some(token) = update.token {
            session.token = Some(token).filter(|t| !t.is_empty());
        }
        if let Some(name) = update.interviewee_name {
            session.interviewee_name = name;
        }
        if let Some(text) = update.transcription {
            session.transcription = Some(text);
        }
        session.last_touched = Instant::now();

        Ok(session.view(id))
    }

    /// Reserva la sesión para guardarla y arma la fila. Mientras dure el guardado
    /// cualquier otro intento recibe `SaveInProgress`.
    pub async fn begin_save(&self, id: Uuid) -> Result<CreateRecordingSchema, RecorderError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(RecorderError::NotFound(id))?;

        if session.state == SessionState::Saving {
            return Err(RecorderError::SaveInProgress);
        }
        if session.interviewee_name.trim().is_empty() {
            return Err(RecorderError::MissingIntervieweeName);
        }
        if session.state != SessionState::Stopped {
            return Err(RecorderError::StillRecording);
        }
        session.state = SessionState::Saving;
        session.last_touched = Instant::now();

        Ok(CreateRecordingSchema {
            interview_request_id: None,
            token: session.token.clone(),
            interviewee_name: session.interviewee_name.trim().to_string(),
            recording_duration: Some(i32::try_from(session.elapsed().as_secs()).unwrap_or(i32::MAX)),
            transcription: session.transcription.clone(),
            audio_file_url: None,
            pdf_file_url: None,
            recorded_by: Some(session.owner.to_string()),
        })
    }

    // El almacén rechazó la fila: la sesión vuelve a estar detenida
    pub async fn abort_save(&self, id: Uuid) {
        if let Some(session) = self.sessions.write().await.get_mut(&id) {
            if session.state == SessionState::Saving {
                session.state = SessionState::Stopped;
                session.last_touched = Instant::now();
            }
        }
    }

    pub async fn finish_save(&self, id: Uuid) {
        self.sessions.write().await.remove(&id);
    }

    /// Abandona una sesión sin guardarla.
    pub async fn discard(&self, id: Uuid) -> Result<(), RecorderError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(&id) {
            None => Err(RecorderError::NotFound(id)),
            Some(session) if session.state == SessionState::Saving => Err(RecorderError::SaveInProgress),
            Some(_) => {
                sessions.remove(&id);
                tracing::debug!("Grabación {} descartada", id);
                Ok(())
            }
        }
    }
}
