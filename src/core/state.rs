//! Application State - Stato globale dell'applicazione
//!
//! Contiene i repository condivisi tra tutte le route.

use crate::repositories::FilmeRepository;
use sqlx::SqlitePool;

/// Stato globale dell'applicazione condiviso tra tutte le route
pub struct AppState {
    /// Repository per la gestione dei filmi
    pub filme: FilmeRepository,
}

impl AppState {
    /// Crea una nuova istanza di AppState con il pool di connessioni fornito
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            filme: FilmeRepository::new(pool),
        }
    }
}
