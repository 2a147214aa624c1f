//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! Le query usano `sqlx::query_as::<_, T>` con `FromRow` (verifica a runtime),
//! così la compilazione non richiede un database raggiungibile.

pub mod filme;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadPage, Update};

pub use filme::FilmeRepository;
