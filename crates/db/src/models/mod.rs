//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Field names stay in Portuguese to match the survey domain and the wire
//! format the frontend already speaks.

pub mod profissional;
pub mod resposta;
