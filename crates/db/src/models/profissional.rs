//! Health professional model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use nutriped_core::types::{DbId, Timestamp};

/// A row from the `profissionais` table.
///
/// `senha` holds the Argon2id PHC hash and is never serialized, so the same
/// struct is safe to return from list and login endpoints.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Profissional {
    pub id: DbId,
    pub nome: String,
    pub login: String,
    #[serde(skip_serializing)]
    pub senha: String,
    pub sus: Option<String>,
    pub cbo: Option<String>,
    pub cnes: Option<String>,
    pub ine: Option<String>,
    pub criado_em: Timestamp,
}

/// Wire DTO for creating a professional. `senha` arrives in plaintext and is
/// hashed by the handler before it reaches the repository.
#[derive(Debug, Deserialize)]
pub struct CreateProfissional {
    pub nome: String,
    pub login: String,
    pub senha: String,
    pub sus: Option<String>,
    pub cbo: Option<String>,
    pub cnes: Option<String>,
    pub ine: Option<String>,
}

/// Insert-ready professional: the create DTO with `senha` already hashed.
#[derive(Debug)]
pub struct NewProfissional {
    pub nome: String,
    pub login: String,
    pub senha_hash: String,
    pub sus: Option<String>,
    pub cbo: Option<String>,
    pub cnes: Option<String>,
    pub ine: Option<String>,
}

impl NewProfissional {
    pub fn from_create(input: CreateProfissional, senha_hash: String) -> Self {
        Self {
            nome: input.nome,
            login: input.login,
            senha_hash,
            sus: input.sus,
            cbo: input.cbo,
            cnes: input.cnes,
            ine: input.ine,
        }
    }
}
