//! Handlers for the `/profissionais` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use nutriped_core::error::CoreError;
use nutriped_core::types::DbId;
use nutriped_core::validation::PROFISSIONAL_REQUIRED;
use nutriped_db::models::profissional::{CreateProfissional, NewProfissional};
use nutriped_db::repositories::ProfissionalRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::handlers::{validated, validated_element};
use crate::state::AppState;

fn hash_input(input: CreateProfissional) -> AppResult<NewProfissional> {
    let senha_hash = hash_password(&input.senha)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;
    Ok(NewProfissional::from_create(input, senha_hash))
}

/// POST /profissionais
///
/// Create a professional. The senha is hashed before storage and never
/// appears in the response.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let input: CreateProfissional = validated(body, PROFISSIONAL_REQUIRED)?;
    let new = hash_input(input)?;

    let profissional = ProfissionalRepo::create(&state.pool, &new).await?;

    tracing::info!(
        profissional_id = profissional.id,
        login = %profissional.login,
        "Professional created"
    );

    Ok((StatusCode::CREATED, Json(profissional)))
}

/// POST /profissionais/lote
///
/// Create several professionals from an array body with one multi-row
/// insert. Returns the created rows.
pub async fn create_lote(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let items = body.as_array().ok_or_else(|| {
        AppError::BadRequest("Expected an array of professionals".to_string())
    })?;
    if items.is_empty() {
        return Err(AppError::BadRequest(
            "Expected a non-empty array of professionals".to_string(),
        ));
    }

    let mut new = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let input: CreateProfissional = validated_element(item, PROFISSIONAL_REQUIRED, index)?;
        new.push(hash_input(input)?);
    }

    let criados = ProfissionalRepo::create_batch(&state.pool, &new).await?;

    tracing::info!(count = criados.len(), "Professionals created in batch");

    Ok((StatusCode::CREATED, Json(criados)))
}

/// GET /profissionais
///
/// List all professionals.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profissionais = ProfissionalRepo::list(&state.pool).await?;
    Ok(Json(profissionais))
}

/// GET /profissionais/{id}
///
/// Get a single professional by id.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let profissional = ProfissionalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profissional",
            id,
        }))?;

    Ok(Json(profissional))
}

/// DELETE /profissionais/{id}
///
/// Delete a professional. Existing responses keep their snapshot fields.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProfissionalRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Profissional",
            id,
        }));
    }

    tracing::info!(profissional_id = id, "Professional deleted");

    Ok(Json(json!({ "message": "Profissional excluído com sucesso" })))
}
