use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;

use crate::{
    db::{character_repo, entities::character},
    error::AppError,
    state::AppState,
};

/// Fixed projection of a character row. `mass` and `eye_color` are stored
/// but never exposed over the API.
#[derive(Debug, Serialize)]
pub struct CharacterResponse {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub height: i32,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/character", get(list_characters))
        .route("/character/{id}", get(character_detail))
        .with_state(state)
}

async fn list_characters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CharacterResponse>>, AppError> {
    let characters = character_repo::list_characters(&state.db)
        .await
        .map_err(|_| AppError::internal("Character fetch failed"))?;
    Ok(Json(
        characters.into_iter().map(CharacterResponse::from).collect(),
    ))
}

async fn character_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<CharacterResponse>, AppError> {
    let character = character_repo::find_by_id(&state.db, id)
        .await
        .map_err(|_| AppError::internal("Character fetch failed"))?
        .ok_or_else(|| AppError::not_found("Character not found"))?;
    Ok(Json(character.into()))
}

impl From<character::Model> for CharacterResponse {
    fn from(model: character::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gender: model.gender,
            height: model.height,
        }
    }
}
