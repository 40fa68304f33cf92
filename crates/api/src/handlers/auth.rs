//! Login handler.
//!
//! Credentials are verified against the stored Argon2id hash; the plaintext
//! comparison of the original service is intentionally not preserved.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use nutriped_core::error::CoreError;
use nutriped_core::validation::LOGIN_REQUIRED;
use nutriped_db::models::profissional::Profissional;
use nutriped_db::repositories::ProfissionalRepo;

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::handlers::validated;
use crate::state::AppState;

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub senha: String,
}

/// POST /login
///
/// Authenticate with login + senha. Returns the professional row (the hash
/// is never serialized) or 401.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Profissional>> {
    let input: LoginRequest = validated(body, LOGIN_REQUIRED)?;

    let profissional = ProfissionalRepo::find_by_login(&state.pool, &input.login)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    let verified = verify_password(&input.senha, &profissional.senha)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;

    if !verified {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    tracing::info!(
        profissional_id = profissional.id,
        login = %profissional.login,
        "Professional logged in"
    );

    Ok(Json(profissional))
}
