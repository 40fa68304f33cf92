//! Survey response model.
//!
//! `data_nasc` is stored as an ISO `DATE` and serialized in the Brazilian
//! `DD/MM/YYYY` display form everywhere it leaves the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

use nutriped_core::dates;
use nutriped_core::types::{DbId, Timestamp};

use crate::models::profissional::Profissional;

/// A row from the `respostas` table.
///
/// The `prof_*` fields are a snapshot of the referenced professional taken at
/// submission time; they are never updated afterwards, even if the
/// professional is later edited or deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Resposta {
    pub id: DbId,
    pub cns: Option<String>,
    pub nome: String,
    #[serde(serialize_with = "serialize_br_date")]
    pub data_nasc: Option<NaiveDate>,
    pub sexo: Option<String>,
    pub local: Option<String>,
    pub leite_peito: Option<String>,
    pub alimentos: Option<String>,
    pub refeicao_tv: Option<String>,
    pub refeicoes: Option<String>,
    pub consumos: Option<String>,
    pub profissional_id: Option<DbId>,
    pub prof_nome: Option<String>,
    pub prof_login: Option<String>,
    pub prof_sus: Option<String>,
    pub prof_cbo: Option<String>,
    pub prof_cnes: Option<String>,
    pub prof_ine: Option<String>,
    pub data_envio: Timestamp,
}

/// A response row joined with the *current* state of its professional, as
/// returned by `GET /respostas/completo`. Unlike the `prof_*` snapshot, the
/// `profissional_*` fields here go stale-free but are NULL once the
/// professional has been deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RespostaCompleta {
    pub id: DbId,
    pub cns: Option<String>,
    pub nome: String,
    #[serde(serialize_with = "serialize_br_date")]
    pub data_nasc: Option<NaiveDate>,
    pub sexo: Option<String>,
    pub local: Option<String>,
    pub leite_peito: Option<String>,
    pub alimentos: Option<String>,
    pub refeicao_tv: Option<String>,
    pub refeicoes: Option<String>,
    pub consumos: Option<String>,
    pub profissional_id: Option<DbId>,
    pub profissional_nome: Option<String>,
    pub profissional_login: Option<String>,
    pub profissional_sus: Option<String>,
    pub profissional_cbo: Option<String>,
    pub profissional_cnes: Option<String>,
    pub profissional_ine: Option<String>,
    pub data_envio: Timestamp,
}

/// Wire DTO for submitting a survey response.
///
/// The frontend historically sent a mix of camelCase and snake_case field
/// names; the aliases keep both working.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResposta {
    pub cns: Option<String>,
    pub nome: String,
    #[serde(default, alias = "dataNasc")]
    pub data_nasc: Option<String>,
    pub sexo: Option<String>,
    pub local: Option<String>,
    #[serde(default, alias = "leitePeito")]
    pub leite_peito: Option<String>,
    pub alimentos: Option<String>,
    #[serde(default, alias = "refeicaoTV")]
    pub refeicao_tv: Option<String>,
    pub refeicoes: Option<String>,
    pub consumos: Option<String>,
    pub profissional_id: Option<DbId>,
}

/// Outcome of a batch insert into `respostas`.
#[derive(Debug)]
pub struct BatchInsert {
    /// Engine-reported number of rows inserted.
    pub rows_affected: u64,
    /// Id of the first inserted row (MySQL assigns the batch consecutively).
    pub first_id: DbId,
    /// The professional rows that were resolved for the snapshot, ordered by id.
    pub profissionais: Vec<Profissional>,
}

/// Serialize an ISO date in the Brazilian `DD/MM/YYYY` display form.
fn serialize_br_date<S: Serializer>(
    date: &Option<NaiveDate>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let iso = date.map(|d| d.to_string());
    match dates::to_br(iso.as_deref()) {
        Some(br) => serializer.serialize_some(&br),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn data_nasc_serializes_in_display_form() {
        let resposta = Resposta {
            id: 1,
            cns: Some("123".into()),
            nome: "Bebê A".into(),
            data_nasc: NaiveDate::from_ymd_opt(2023, 12, 25),
            sexo: None,
            local: None,
            leite_peito: None,
            alimentos: None,
            refeicao_tv: None,
            refeicoes: None,
            consumos: None,
            profissional_id: None,
            prof_nome: None,
            prof_login: None,
            prof_sus: None,
            prof_cbo: None,
            prof_cnes: None,
            prof_ine: None,
            data_envio: Utc::now(),
        };

        let json = serde_json::to_value(&resposta).unwrap();
        assert_eq!(json["data_nasc"], "25/12/2023");
        assert_eq!(json["nome"], "Bebê A");
    }

    #[test]
    fn create_resposta_accepts_legacy_camel_case() {
        let input: CreateResposta = serde_json::from_value(serde_json::json!({
            "nome": "Bebê B",
            "dataNasc": "25/12/2023",
            "leitePeito": "sim",
            "refeicaoTV": "nao",
            "profissional_id": 7
        }))
        .unwrap();

        assert_eq!(input.data_nasc.as_deref(), Some("25/12/2023"));
        assert_eq!(input.leite_peito.as_deref(), Some("sim"));
        assert_eq!(input.refeicao_tv.as_deref(), Some("nao"));
        assert_eq!(input.profissional_id, Some(7));
    }
}
