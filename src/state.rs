use crate::{db::DbStore, recorder::Recorder, utils::jwt::JwtKeys};

// Dependencias compartidas por todos los handlers; se pasa al Router con with_state
#[derive(Clone)]
pub struct AppState {
    pub store: DbStore,
    pub jwt: JwtKeys,
    pub recorder: Recorder,
}
