//! HTTP-level integration tests for the `/profissionais` endpoints and login.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, seed_profissional};
use sqlx::MySqlPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_returns_201_without_senha(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/profissionais",
        serde_json::json!({
            "nome": "Dra. Ana",
            "login": "ana",
            "senha": "segredo123",
            "cbo": "225124"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["nome"], "Dra. Ana");
    assert_eq!(json["cbo"], "225124");
    assert!(
        json.get("senha").is_none(),
        "senha must never be serialized"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_missing_field_returns_400_naming_it(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/profissionais",
        serde_json::json!({"nome": "Dra. Ana", "login": "ana"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("senha"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_login_returns_409(pool: MySqlPool) {
    seed_profissional(&pool, "Dra. Ana", "ana").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/profissionais",
        serde_json::json!({"nome": "Outra Ana", "login": "ana", "senha": "outra"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Batch create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn lote_creates_all_in_order(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/profissionais/lote",
        serde_json::json!([
            {"nome": "Dr. X", "login": "drx", "senha": "s1"},
            {"nome": "Dr. Y", "login": "dry", "senha": "s2"}
        ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["login"], "drx");
    assert_eq!(rows[1]["login"], "dry");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lote_rejects_non_array(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/profissionais/lote",
        serde_json::json!({"nome": "Dr. X", "login": "drx", "senha": "s1"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lote_names_field_and_index_on_invalid_element(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/profissionais/lote",
        serde_json::json!([
            {"nome": "Dr. X", "login": "drx", "senha": "s1"},
            {"nome": "Dr. Y", "login": "dry"}
        ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("senha"));
    assert!(message.contains("index 1"));
}

// ---------------------------------------------------------------------------
// Read / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_all_without_senha(pool: MySqlPool) {
    seed_profissional(&pool, "Dra. Ana", "ana").await;
    seed_profissional(&pool, "Dr. Beto", "beto").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/profissionais").await;

    assert_eq!(response.status(), StatusCode::OK);
    let rows = body_json(response).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert!(row.get("senha").is_none());
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_id_returns_row_or_404(pool: MySqlPool) {
    let created = seed_profissional(&pool, "Dra. Ana", "ana").await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/profissionais/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["nome"], "Dra. Ana");

    let app = common::build_test_app(pool);
    let response = get(app, "/profissionais/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_confirms_then_404(pool: MySqlPool) {
    let created = seed_profissional(&pool, "Dra. Ana", "ana").await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/profissionais/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("excluído"));

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/profissionais/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_valid_credentials_returns_row(pool: MySqlPool) {
    seed_profissional(&pool, "Dra. Ana", "ana").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/login",
        serde_json::json!({"login": "ana", "senha": "segredo123"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["login"], "ana");
    assert!(json.get("senha").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_wrong_senha_returns_401(pool: MySqlPool) {
    seed_profissional(&pool, "Dra. Ana", "ana").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/login",
        serde_json::json!({"login": "ana", "senha": "errada"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_unknown_login_returns_401(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/login",
        serde_json::json!({"login": "ninguem", "senha": "qualquer"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_missing_field_returns_400(pool: MySqlPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/login", serde_json::json!({"login": "ana"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("senha"));
}
