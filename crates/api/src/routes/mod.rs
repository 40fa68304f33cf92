//! Route definitions, one module per resource.

pub mod auth;
pub mod health;
pub mod profissionais;
pub mod respostas;

use axum::Router;

use crate::state::AppState;

/// All resource routes, mounted at the root.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/profissionais", profissionais::router())
        .nest("/respostas", respostas::router())
}
