//! Required-field checks applied to raw JSON request bodies before they are
//! deserialized into DTOs.
//!
//! The presence rule is explicit rather than truthiness-based: a field is
//! missing when the key is absent, the value is JSON null, or the value is a
//! string that is empty after trimming. Numeric zero and boolean `false`
//! count as present.

use serde_json::{Map, Value};

/// Required fields for `POST /login`.
pub const LOGIN_REQUIRED: &[&str] = &["login", "senha"];

/// Required fields for creating a professional.
pub const PROFISSIONAL_REQUIRED: &[&str] = &["nome", "login", "senha"];

/// Required fields for submitting a survey response.
pub const RESPOSTA_REQUIRED: &[&str] = &["nome", "profissional_id"];

/// Return the first required field that is missing from `record`, or `None`
/// when all required fields are present.
pub fn first_missing_field<'a>(
    record: &Map<String, Value>,
    required: &[&'a str],
) -> Option<&'a str> {
    required
        .iter()
        .find(|name| is_missing(record.get(**name)))
        .copied()
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}
