//! Entities module - Entità del dominio applicativo
//!
//! Ogni entity corrisponde a una tabella nel database.

pub mod filme;

// Re-exports per facilitare l'import
pub use filme::Filme;
