//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&MySqlPool` as the first argument.

pub mod profissional_repo;
pub mod resposta_repo;

pub use profissional_repo::ProfissionalRepo;
pub use resposta_repo::RespostaRepo;
