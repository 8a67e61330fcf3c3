use crate::{db::Store, models::user::User};

// Credenciales de demostración: únicos pares aceptados
const DEMO_CREDENTIALS: [(&str, &str); 2] = [("admin", "admin123"), ("user", "user123")];

#[derive(Debug)]
pub enum AuthOutcome {
    Success(User),
    Failure(&'static str),
}

// Verificar contraseña contra los pares fijos.
// No se consulta ninguna credencial guardada en la fila del usuario.
pub fn matches_demo_credentials(username: &str, password: &str) -> bool {
    DEMO_CREDENTIALS
        .iter()
        .any(|(user, pass)| *user == username && *pass == password)
}

/// Busca al usuario por nombre exacto y valida la contraseña con los pares fijos.
pub async fn authenticate_user(store: &dyn Store, username: &str, password: &str) -> AuthOutcome {
    let user = match store.find_user_by_username(username).await {
        Ok(Some(user)) => user,
        Ok(None) => return AuthOutcome::Failure("User not found"),
        Err(e) => {
            tracing::error!("Error autenticando a {}: {:?}", username, e);
            return AuthOutcome::Failure("Authentication failed");
        }
    };

    if !matches_demo_credentials(username, password) {
        return AuthOutcome::Failure("Invalid password");
    }

    AuthOutcome::Success(user)
}
