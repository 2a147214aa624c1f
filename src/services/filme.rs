//! Filme services - Gestione CRUD dei filmi

use crate::core::{AppError, AppState};
use crate::dtos::{
    CreateFilmeDto, PageQuery, PatchOperation, ReadFilmeDto, UpdateFilmeDto, apply_patch,
};
use crate::entities::Filme;
use crate::repositories::{Create, Delete, Read, ReadPage, Update};
use axum::{
    extract::{Json, Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, payload))]
pub async fn create_filme(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateFilmeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating new filme");
    // 1. Rifiutare con 400 un body malformato o con tipi sbagliati
    // 2. Validare il DTO, 400 con l'elenco dei campi invalidi
    // 3. Mappare il DTO in un Filme senza id
    // 4. Salvare: l'id viene assegnato dal database
    // 5. Ritornare 201 con il filme e la Location per recuperarlo
    let Json(body) = payload.inspect_err(|e| warn!("Malformed filme body: {}", e.body_text()))?;
    body.validate().inspect_err(|e| warn!("Invalid filme: {}", e))?;

    let filme = state.filme.create(&Filme::from(body)).await?;

    info!("Filme {} created", filme.id);
    let location = format!("/filme/{}", filme.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(filme)))
}

#[instrument(skip(state))]
pub async fn list_filmes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>, // query params /filme?skip=0&take=10
) -> Result<Json<Vec<ReadFilmeDto>>, AppError> {
    debug!("Listing filmes");
    let PageQuery { skip, take } = query.clamped();

    let filmes = state.filme.read_page(skip, take).await?;

    info!("Returning {} filmes", filmes.len());
    Ok(Json(filmes.into_iter().map(ReadFilmeDto::from).collect()))
}

/// Ritorna l'entity così com'è, non la proiezione `ReadFilmeDto`
#[instrument(skip(state), fields(filme_id = %id))]
pub async fn get_filme_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Filme>, AppError> {
    debug!("Fetching filme by id");
    match state.filme.read(&id).await? {
        Some(filme) => {
            info!("Filme found");
            Ok(Json(filme))
        }
        None => {
            warn!("Filme not found");
            Err(AppError::not_found("Filme not found"))
        }
    }
}

#[instrument(skip(state, payload), fields(filme_id = %id))]
pub async fn update_filme(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateFilmeDto>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    debug!("Replacing filme");
    let Json(body) = payload.inspect_err(|e| warn!("Malformed filme body: {}", e.body_text()))?;
    // Il PUT richiede tutti i campi: la validazione fallisce se ne manca uno
    body.validate().inspect_err(|e| warn!("Invalid filme: {}", e))?;

    let mut filme = find_filme(&state, id).await?;
    body.apply_to(&mut filme);
    state.filme.update(&id, &filme).await?;

    info!("Filme replaced");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, payload), fields(filme_id = %id))]
pub async fn patch_filme(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    payload: Result<Json<Vec<PatchOperation>>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    debug!("Patching filme");
    // 1. Recuperare il filme, 404 se non esiste (prima di guardare il documento)
    // 2. Rifiutare con 422 un documento di patch malformato (op o path sconosciuti)
    // 3. Proiettare il filme in UpdateFilmeDto e applicare le operazioni in ordine
    // 4. Validare il DTO risultante; in caso di errori 422 senza salvare nulla
    // 5. Riportare il DTO sul filme e salvare
    let mut filme = find_filme(&state, id).await?;

    let Json(operations) = payload.map_err(|rejection| {
        warn!("Malformed patch document: {}", rejection.body_text());
        AppError::unprocessable_entity("Invalid patch document").with_details(rejection.body_text())
    })?;

    let mut dto = UpdateFilmeDto::from(&filme);
    let patch_errors = apply_patch(&operations, &mut dto);
    let validation = dto.validate().err();

    if !patch_errors.is_empty() || validation.is_some() {
        warn!(
            "Patch rejected: {} failed operations, invalid result: {}",
            patch_errors.len(),
            validation.is_some()
        );
        return Err(AppError::patch_validation(patch_errors, validation));
    }

    dto.apply_to(&mut filme);
    state.filme.update(&id, &filme).await?;

    info!("Filme patched with {} operations", operations.len());
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state), fields(filme_id = %id))]
pub async fn delete_filme(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    debug!("Deleting filme");
    find_filme(&state, id).await?;
    state.filme.delete(&id).await?;

    info!("Filme deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Verifica di esistenza prima di qualsiasi modifica
async fn find_filme(state: &AppState, id: i32) -> Result<Filme, AppError> {
    state.filme.read(&id).await?.ok_or_else(|| {
        warn!("Filme {} not found", id);
        AppError::not_found("Filme not found")
    })
}
