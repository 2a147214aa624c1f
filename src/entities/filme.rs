//! Filme entity - Entità filme persistita nella tabella `filmes`

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Filme {
    /// Assegnato dal database all'inserimento, mai dal client
    pub id: i32,
    pub titulo: String,
    pub genero: String,
    pub duracao: i32,
}
