//! Repository for the `respostas` table.
//!
//! The write path is batch-first: `POST /respostas` is a batch of one. A
//! batch resolves every referenced professional with a single `IN (...)`
//! lookup, denormalizes the selected professional fields onto each response
//! row in memory, and persists everything with one multi-row insert. The
//! multi-row statement is atomic at the engine level, so a batch either
//! lands whole or not at all.

use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use sqlx::{MySql, MySqlPool, QueryBuilder};

use nutriped_core::dates;
use nutriped_core::types::{DbId, Timestamp};

use crate::models::profissional::Profissional;
use crate::models::resposta::{BatchInsert, CreateResposta, Resposta, RespostaCompleta};

/// Column list for respostas queries.
const COLUMNS: &str = "id, cns, nome, data_nasc, sexo, local, leite_peito, alimentos, \
    refeicao_tv, refeicoes, consumos, profissional_id, prof_nome, prof_login, prof_sus, \
    prof_cbo, prof_cnes, prof_ine, data_envio";

/// One insert-ready response row with its professional snapshot applied.
#[derive(Debug)]
struct SnapshotRow {
    cns: Option<String>,
    nome: String,
    data_nasc: Option<String>,
    sexo: Option<String>,
    local: Option<String>,
    leite_peito: Option<String>,
    alimentos: Option<String>,
    refeicao_tv: Option<String>,
    refeicoes: Option<String>,
    consumos: Option<String>,
    profissional_id: Option<DbId>,
    prof_nome: Option<String>,
    prof_login: Option<String>,
    prof_sus: Option<String>,
    prof_cbo: Option<String>,
    prof_cnes: Option<String>,
    prof_ine: Option<String>,
    data_envio: Timestamp,
}

/// Merge each submission with its resolved professional, in submission order.
///
/// A submission whose `profissional_id` is absent or matches no professional
/// gets an all-NULL snapshot; the batch still succeeds. `data_nasc` is
/// normalized to the ISO storage form here. All rows of one batch share the
/// same `data_envio`.
fn snapshot_rows(
    inputs: &[CreateResposta],
    profissionais: &HashMap<DbId, &Profissional>,
    enviado_em: Timestamp,
) -> Vec<SnapshotRow> {
    inputs
        .iter()
        .map(|r| {
            let prof = r
                .profissional_id
                .and_then(|id| profissionais.get(&id).copied());
            SnapshotRow {
                cns: r.cns.clone(),
                nome: r.nome.clone(),
                data_nasc: dates::to_iso(r.data_nasc.as_deref()),
                sexo: r.sexo.clone(),
                local: r.local.clone(),
                leite_peito: r.leite_peito.clone(),
                alimentos: r.alimentos.clone(),
                refeicao_tv: r.refeicao_tv.clone(),
                refeicoes: r.refeicoes.clone(),
                consumos: r.consumos.clone(),
                profissional_id: r.profissional_id,
                prof_nome: prof.map(|p| p.nome.clone()),
                prof_login: prof.map(|p| p.login.clone()),
                prof_sus: prof.and_then(|p| p.sus.clone()),
                prof_cbo: prof.and_then(|p| p.cbo.clone()),
                prof_cnes: prof.and_then(|p| p.cnes.clone()),
                prof_ine: prof.and_then(|p| p.ine.clone()),
                data_envio: enviado_em,
            }
        })
        .collect()
}

/// Provides CRUD and batch-insert operations for survey responses.
pub struct RespostaRepo;

impl RespostaRepo {
    /// Insert a batch of responses with their professional snapshots.
    ///
    /// The caller guarantees `inputs` is non-empty. A failed lookup aborts
    /// the batch before anything is written; a failed insert writes nothing.
    pub async fn insert_batch(
        pool: &MySqlPool,
        inputs: &[CreateResposta],
    ) -> Result<BatchInsert, sqlx::Error> {
        let profissionais = Self::lookup_referenced(pool, inputs).await?;
        let by_id: HashMap<DbId, &Profissional> =
            profissionais.iter().map(|p| (p.id, p)).collect();

        let enviado_em = Utc::now();
        let rows = snapshot_rows(inputs, &by_id, enviado_em);

        let mut qb = QueryBuilder::<MySql>::new(
            "INSERT INTO respostas (cns, nome, data_nasc, sexo, local, leite_peito, \
             alimentos, refeicao_tv, refeicoes, consumos, profissional_id, prof_nome, \
             prof_login, prof_sus, prof_cbo, prof_cnes, prof_ine, data_envio) ",
        );
        qb.push_values(&rows, |mut b, row| {
            b.push_bind(&row.cns)
                .push_bind(&row.nome)
                .push_bind(&row.data_nasc)
                .push_bind(&row.sexo)
                .push_bind(&row.local)
                .push_bind(&row.leite_peito)
                .push_bind(&row.alimentos)
                .push_bind(&row.refeicao_tv)
                .push_bind(&row.refeicoes)
                .push_bind(&row.consumos)
                .push_bind(row.profissional_id)
                .push_bind(&row.prof_nome)
                .push_bind(&row.prof_login)
                .push_bind(&row.prof_sus)
                .push_bind(&row.prof_cbo)
                .push_bind(&row.prof_cnes)
                .push_bind(&row.prof_ine)
                .push_bind(row.data_envio);
        });

        let result = qb.build().execute(pool).await?;

        tracing::debug!(
            inserted = result.rows_affected(),
            resolved = profissionais.len(),
            "Batch of responses inserted"
        );

        Ok(BatchInsert {
            rows_affected: result.rows_affected(),
            first_id: result.last_insert_id() as DbId,
            profissionais,
        })
    }

    /// Fetch every professional referenced by the batch with one `IN (...)`
    /// query. Returns rows ordered by id.
    async fn lookup_referenced(
        pool: &MySqlPool,
        inputs: &[CreateResposta],
    ) -> Result<Vec<Profissional>, sqlx::Error> {
        let ids: BTreeSet<DbId> = inputs.iter().filter_map(|r| r.profissional_id).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut qb = QueryBuilder::<MySql>::new(
            "SELECT id, nome, login, senha, sus, cbo, cnes, ine, criado_em \
             FROM profissionais WHERE id IN (",
        );
        let mut sep = qb.separated(", ");
        for id in &ids {
            sep.push_bind(*id);
        }
        qb.push(") ORDER BY id");

        qb.build_query_as::<Profissional>().fetch_all(pool).await
    }

    /// Find a response by id.
    pub async fn find_by_id(
        pool: &MySqlPool,
        id: DbId,
    ) -> Result<Option<Resposta>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM respostas WHERE id = ?");
        sqlx::query_as::<_, Resposta>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all responses, newest first.
    pub async fn list(pool: &MySqlPool) -> Result<Vec<Resposta>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM respostas ORDER BY id DESC");
        sqlx::query_as::<_, Resposta>(&query).fetch_all(pool).await
    }

    /// List all responses joined with the current state of their
    /// professional, newest first.
    pub async fn list_completo(pool: &MySqlPool) -> Result<Vec<RespostaCompleta>, sqlx::Error> {
        sqlx::query_as::<_, RespostaCompleta>(
            "SELECT r.id, r.cns, r.nome, r.data_nasc, r.sexo, r.local, r.leite_peito, \
                r.alimentos, r.refeicao_tv, r.refeicoes, r.consumos, r.profissional_id, \
                p.nome AS profissional_nome, p.login AS profissional_login, \
                p.sus AS profissional_sus, p.cbo AS profissional_cbo, \
                p.cnes AS profissional_cnes, p.ine AS profissional_ine, \
                r.data_envio \
             FROM respostas r \
             LEFT JOIN profissionais p ON r.profissional_id = p.id \
             ORDER BY r.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Delete a response by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &MySqlPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM respostas WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
