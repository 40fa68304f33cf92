//! HTTP handlers, one module per resource.
//!
//! Bodies arrive as raw `serde_json::Value` so the required-field check can
//! name the offending field (and batch index) before deserialization.

pub mod auth;
pub mod profissionais;
pub mod respostas;

use serde::de::DeserializeOwned;
use serde_json::Value;

use nutriped_core::validation::first_missing_field;

use crate::error::{AppError, AppResult};

/// Check a JSON object body for required fields, then deserialize it.
pub(crate) fn validated<T: DeserializeOwned>(body: Value, required: &[&str]) -> AppResult<T> {
    let record = body
        .as_object()
        .ok_or_else(|| AppError::BadRequest("Expected a JSON object".to_string()))?;

    if let Some(field) = first_missing_field(record, required) {
        return Err(AppError::BadRequest(format!(
            "Missing required field: {field}"
        )));
    }

    serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))
}

/// Validate and deserialize one element of a batch body; errors name the
/// element index so the client can fix the right entry.
pub(crate) fn validated_element<T: DeserializeOwned>(
    item: &Value,
    required: &[&str],
    index: usize,
) -> AppResult<T> {
    let record = item.as_object().ok_or_else(|| {
        AppError::BadRequest(format!("Element at index {index} must be a JSON object"))
    })?;

    if let Some(field) = first_missing_field(record, required) {
        return Err(AppError::BadRequest(format!(
            "Missing required field '{field}' at index {index}"
        )));
    }

    serde_json::from_value(item.clone())
        .map_err(|e| AppError::BadRequest(format!("Invalid element at index {index}: {e}")))
}
