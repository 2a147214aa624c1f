//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod filme;
pub mod patch;
pub mod query;

// Re-exports per facilitare l'import
pub use filme::{CreateFilmeDto, ReadFilmeDto, UpdateFilmeDto};
pub use patch::{FilmeField, PatchError, PatchOperation, apply_patch};
pub use query::PageQuery;
