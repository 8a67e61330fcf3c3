mod config;
mod db;
mod handlers;
mod models;
mod recorder;
mod routes;
mod state;
mod utils;

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::AppConfig, recorder::Recorder, state::AppState, utils::jwt::JwtKeys};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuración inválida: {}", e);
            std::process::exit(1);
        }
    };

    let store = match db::init_store(config.store.as_ref()).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    if store.is_mock() {
        tracing::info!("Modo offline: lecturas con datos de ejemplo, escrituras sin persistir");
    } else {
        tracing::info!("✅ Conexión a Postgres exitosa");
    }

    let state = AppState {
        store,
        jwt: JwtKeys::new(&config.jwt_secret),
        recorder: Recorder::new(config.transcription_delay),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_routes(state).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Servidor de prensa corriendo en http://{}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Fallo al enlazar el puerto {}: {}", config.port, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("El servidor terminó con error: {}", e);
    }
}

