//! Filmes API - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config};
pub use services::root;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/filme", configure_filme_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Configura le routes CRUD dei filmi
fn configure_filme_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(list_filmes).post(create_filme))
        .route(
            "/{id}",
            get(get_filme_by_id)
                .put(update_filme)
                .patch(patch_filme)
                .delete(delete_filme),
        )
}
