#![allow(dead_code)]

use axum_test::TestServer;
use filmes_api::core::AppState;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Crea un AppState per i test
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool))
}

/// Crea un TestServer sul router completo dell'applicazione
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let app = filmes_api::create_router(create_test_state(pool));
    TestServer::new(app).expect("Failed to create test server")
}

/// Body valido per POST /filme e PUT /filme/{id}
pub fn filme_body(titulo: &str) -> Value {
    json!({
        "titulo": titulo,
        "genero": "Drama",
        "duracao": 120
    })
}

/// Crea un filme via API e ritorna l'id assegnato
pub async fn insert_filme(server: &TestServer, titulo: &str) -> i64 {
    let response = server.post("/filme").json(&filme_body(titulo)).await;
    let created: Value = response.json();
    created["id"].as_i64().expect("created filme has an id")
}

/// Legge un filme via API come JSON
pub async fn fetch_filme(server: &TestServer, id: i64) -> Value {
    let response = server.get(&format!("/filme/{id}")).await;
    response.assert_status_ok();
    response.json()
}
