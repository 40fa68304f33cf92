//! Handlers for the `/respostas` resource.
//!
//! Writes go through `RespostaRepo::insert_batch`: the single-submission
//! endpoint is a batch of one, so both paths share the lookup-and-snapshot
//! logic.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use nutriped_core::error::CoreError;
use nutriped_core::types::DbId;
use nutriped_core::validation::RESPOSTA_REQUIRED;
use nutriped_db::models::resposta::CreateResposta;
use nutriped_db::repositories::RespostaRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{validated, validated_element};
use crate::state::AppState;

/// POST /respostas
///
/// Submit a single survey response. Returns the stored row, including the
/// denormalized professional snapshot.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let input: CreateResposta = validated(body, RESPOSTA_REQUIRED)?;

    let batch = RespostaRepo::insert_batch(&state.pool, std::slice::from_ref(&input)).await?;
    let resposta = RespostaRepo::find_by_id(&state.pool, batch.first_id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError("Inserted response could not be read back".to_string())
        })?;

    tracing::info!(resposta_id = resposta.id, "Response created");

    Ok((StatusCode::CREATED, Json(resposta)))
}

/// POST /respostas/lote
///
/// Submit a batch of survey responses. All referenced professionals are
/// resolved with one lookup and the rows land in one multi-row insert;
/// the batch succeeds or fails as a whole.
pub async fn create_lote(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let items = body
        .as_array()
        .ok_or_else(|| AppError::BadRequest("Expected an array of responses".to_string()))?;
    if items.is_empty() {
        return Err(AppError::BadRequest(
            "Expected a non-empty array of responses".to_string(),
        ));
    }

    let mut inputs: Vec<CreateResposta> = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        inputs.push(validated_element(item, RESPOSTA_REQUIRED, index)?);
    }

    let batch = RespostaRepo::insert_batch(&state.pool, &inputs).await?;

    tracing::info!(
        inseridos = batch.rows_affected,
        profissionais = batch.profissionais.len(),
        "Batch of responses created"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "mensagem": "Respostas salvas com sucesso",
            "inseridos": batch.rows_affected,
            "profissionais": batch.profissionais,
        })),
    ))
}

/// GET /respostas
///
/// List all responses, newest first, with `data_nasc` in display form.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let respostas = RespostaRepo::list(&state.pool).await?;
    Ok(Json(respostas))
}

/// GET /respostas/completo
///
/// List all responses joined with the current state of their professional
/// (NULL where the professional no longer exists).
pub async fn list_completo(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let respostas = RespostaRepo::list_completo(&state.pool).await?;
    Ok(Json(respostas))
}

/// GET /respostas/{id}
///
/// Get a single response by id.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let resposta = RespostaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resposta",
            id,
        }))?;

    Ok(Json(resposta))
}

/// DELETE /respostas/{id}
///
/// Delete a response.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RespostaRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Resposta",
            id,
        }));
    }

    tracing::info!(resposta_id = id, "Response deleted");

    Ok(Json(json!({ "message": "Resposta excluída com sucesso" })))
}
