//! Repository for the `profissionais` table.

use sqlx::{MySql, MySqlPool, QueryBuilder};

use nutriped_core::types::DbId;

use crate::models::profissional::{NewProfissional, Profissional};

/// Column list for profissionais queries.
const COLUMNS: &str = "id, nome, login, senha, sus, cbo, cnes, ine, criado_em";

/// Provides CRUD operations for health professionals.
pub struct ProfissionalRepo;

impl ProfissionalRepo {
    /// Insert a professional, returning the created row.
    ///
    /// MySQL has no `RETURNING`, so the row is re-read by its generated id.
    pub async fn create(
        pool: &MySqlPool,
        input: &NewProfissional,
    ) -> Result<Profissional, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO profissionais (nome, login, senha, sus, cbo, cnes, ine)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&input.nome)
        .bind(&input.login)
        .bind(&input.senha_hash)
        .bind(&input.sus)
        .bind(&input.cbo)
        .bind(&input.cnes)
        .bind(&input.ine)
        .execute(pool)
        .await?;

        let id = result.last_insert_id() as DbId;
        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Insert several professionals with a single multi-row statement,
    /// returning the created rows in input order.
    ///
    /// A single multi-row insert allocates one consecutive block of
    /// auto-increment ids, so the created rows are `first..first + n`.
    pub async fn create_batch(
        pool: &MySqlPool,
        inputs: &[NewProfissional],
    ) -> Result<Vec<Profissional>, sqlx::Error> {
        let mut qb = QueryBuilder::<MySql>::new(
            "INSERT INTO profissionais (nome, login, senha, sus, cbo, cnes, ine) ",
        );
        qb.push_values(inputs, |mut b, p| {
            b.push_bind(&p.nome)
                .push_bind(&p.login)
                .push_bind(&p.senha_hash)
                .push_bind(&p.sus)
                .push_bind(&p.cbo)
                .push_bind(&p.cnes)
                .push_bind(&p.ine);
        });

        let result = qb.build().execute(pool).await?;
        let first = result.last_insert_id() as DbId;
        let last = first + result.rows_affected() as DbId - 1;

        let query =
            format!("SELECT {COLUMNS} FROM profissionais WHERE id BETWEEN ? AND ? ORDER BY id");
        sqlx::query_as::<_, Profissional>(&query)
            .bind(first)
            .bind(last)
            .fetch_all(pool)
            .await
    }

    /// Find a professional by id.
    pub async fn find_by_id(
        pool: &MySqlPool,
        id: DbId,
    ) -> Result<Option<Profissional>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profissionais WHERE id = ?");
        sqlx::query_as::<_, Profissional>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a professional by login, for credential checks.
    pub async fn find_by_login(
        pool: &MySqlPool,
        login: &str,
    ) -> Result<Option<Profissional>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profissionais WHERE login = ? LIMIT 1");
        sqlx::query_as::<_, Profissional>(&query)
            .bind(login)
            .fetch_optional(pool)
            .await
    }

    /// List all professionals.
    pub async fn list(pool: &MySqlPool) -> Result<Vec<Profissional>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profissionais ORDER BY id");
        sqlx::query_as::<_, Profissional>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a professional by id. Returns `true` if a row was deleted.
    ///
    /// Existing responses keep their `prof_*` snapshot untouched.
    pub async fn delete(pool: &MySqlPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM profissionais WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
