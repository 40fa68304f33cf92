//! Route definitions for the `/profissionais` resource.
//!
//! ```text
//! GET    /          -> list
//! POST   /          -> create
//! POST   /lote      -> create_lote
//! GET    /{id}      -> get_by_id
//! DELETE /{id}      -> delete
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::profissionais;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(profissionais::list).post(profissionais::create),
        )
        .route("/lote", post(profissionais::create_lote))
        .route(
            "/{id}",
            get(profissionais::get_by_id).delete(profissionais::delete),
        )
}
