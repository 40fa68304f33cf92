//! Route definitions for the `/respostas` resource.
//!
//! ```text
//! GET    /          -> list (data_nasc in display form)
//! POST   /          -> create (batch of one)
//! POST   /lote      -> create_lote
//! GET    /completo  -> list_completo (joined with current professional)
//! GET    /{id}      -> get_by_id
//! DELETE /{id}      -> delete
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::respostas;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(respostas::list).post(respostas::create))
        .route("/lote", post(respostas::create_lote))
        .route("/completo", get(respostas::list_completo))
        .route(
            "/{id}",
            get(respostas::get_by_id).delete(respostas::delete),
        )
}
