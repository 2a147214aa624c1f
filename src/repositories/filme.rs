//! FilmeRepository - Repository per la gestione dei filmi

use super::{Create, Delete, Read, ReadPage, Update};
use crate::entities::Filme;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument, warn};

// FILME REPOSITORY
pub struct FilmeRepository {
    connection_pool: SqlitePool,
}

impl FilmeRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }
}

impl Create<Filme, Filme> for FilmeRepository {
    #[instrument(skip(self, data), fields(titulo = %data.titulo))]
    async fn create(&self, data: &Filme) -> Result<Filme, Error> {
        debug!("Inserting new filme");
        // Transazione: se il rowid non entra in un i32 l'insert viene annullato
        let mut tx = self.connection_pool.begin().await?;

        let result = sqlx::query("INSERT INTO filmes (titulo, genero, duracao) VALUES (?, ?, ?)")
            .bind(&data.titulo)
            .bind(&data.genero)
            .bind(data.duracao)
            .execute(&mut *tx)
            .await?;

        // L'id passato viene ignorato: vale quello generato da SQLite
        let new_id = i32::try_from(result.last_insert_rowid()).map_err(|e| {
            warn!("Generated rowid {} does not fit an i32", result.last_insert_rowid());
            Error::Decode(Box::new(e))
        })?;

        tx.commit().await?;

        info!("Filme created with id {}", new_id);

        Ok(Filme {
            id: new_id,
            ..data.clone()
        })
    }
}

impl Read<Filme, i32> for FilmeRepository {
    #[instrument(skip(self), fields(filme_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Filme>, Error> {
        debug!("Reading filme by id");
        let filme = sqlx::query_as::<_, Filme>(
            "SELECT id, titulo, genero, duracao FROM filmes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(filme)
    }
}

impl ReadPage<Filme> for FilmeRepository {
    #[instrument(skip(self))]
    async fn read_page(&self, skip: i64, take: i64) -> Result<Vec<Filme>, Error> {
        debug!("Reading filme page");
        let filmes = sqlx::query_as::<_, Filme>(
            "SELECT id, titulo, genero, duracao FROM filmes LIMIT ? OFFSET ?",
        )
        .bind(take)
        .bind(skip)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Read {} filmes", filmes.len());
        Ok(filmes)
    }
}

impl Update<Filme, Filme, i32> for FilmeRepository {
    #[instrument(skip(self, data), fields(filme_id = %id))]
    async fn update(&self, id: &i32, data: &Filme) -> Result<Filme, Error> {
        debug!("Updating filme");
        let result =
            sqlx::query("UPDATE filmes SET titulo = ?, genero = ?, duracao = ? WHERE id = ?")
                .bind(&data.titulo)
                .bind(&data.genero)
                .bind(data.duracao)
                .bind(id)
                .execute(&self.connection_pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Filme updated");
        Ok(Filme {
            id: *id,
            ..data.clone()
        })
    }
}

impl Delete<i32> for FilmeRepository {
    #[instrument(skip(self), fields(filme_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        debug!("Deleting filme");
        let result = sqlx::query("DELETE FROM filmes WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Filme deleted");
        Ok(())
    }
}
