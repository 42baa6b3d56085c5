use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    db::{
        character_repo,
        entities::{favorite_character, favorite_planet, user},
        favorite_repo, planet_repo, user_repo,
    },
    error::AppError,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct FavoritesRequest {
    pub user: UserRef,
}

#[derive(Debug, Deserialize)]
pub struct UserRef {
    pub id: i32,
}

#[derive(Debug, Deserialize)]
pub struct AddFavoriteCharacterRequest {
    pub character_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct AddFavoritePlanetRequest {
    pub planet_id: i32,
}

#[derive(Debug, Serialize)]
pub struct FavoriteCharacterResponse {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
}

#[derive(Debug, Serialize)]
pub struct FavoritePlanetResponse {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    #[serde(rename = "favoritePlanets")]
    pub favorite_planets: Vec<FavoritePlanetResponse>,
    #[serde(rename = "favoriteCharacters")]
    pub favorite_characters: Vec<FavoriteCharacterResponse>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/user/favorites", get(user_favorites))
        .route("/users/{user_id}/favorites", post(add_favorite_character))
        .route(
            "/users/{user_id}/planet/favorites",
            post(add_favorite_planet),
        )
        .route(
            "/favorite/people/{character_id}",
            delete(delete_favorite_character),
        )
        .route(
            "/favorite/planet/{planet_id}",
            delete(delete_favorite_planet),
        )
        .with_state(state)
}

async fn user_favorites(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FavoritesRequest>,
) -> Result<Json<FavoritesResponse>, Response> {
    let user = user_repo::find_by_id(&state.db, body.user.id)
        .await
        .map_err(|_| AppError::internal("User fetch failed").into_response())?;
    if user.is_none() {
        // Legacy contract: bare string body, kept verbatim for existing clients.
        return Err((StatusCode::NOT_FOUND, Json("User do not exist")).into_response());
    }

    let favorite_planets = favorite_repo::planets_for_user(&state.db, body.user.id)
        .await
        .map_err(|_| AppError::internal("Favorite fetch failed").into_response())?;
    let favorite_characters = favorite_repo::characters_for_user(&state.db, body.user.id)
        .await
        .map_err(|_| AppError::internal("Favorite fetch failed").into_response())?;

    Ok(Json(FavoritesResponse {
        favorite_planets: favorite_planets
            .into_iter()
            .map(FavoritePlanetResponse::from)
            .collect(),
        favorite_characters: favorite_characters
            .into_iter()
            .map(FavoriteCharacterResponse::from)
            .collect(),
    }))
}

async fn add_favorite_character(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
    Json(body): Json<AddFavoriteCharacterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    require_user(&state, user_id).await?;
    if character_repo::find_by_id(&state.db, body.character_id)
        .await
        .map_err(|_| AppError::internal("Character fetch failed"))?
        .is_none()
    {
        return Err(AppError::bad_request("Character does not exist"));
    }

    favorite_repo::add_character(&state.db, user_id, body.character_id)
        .await
        .map_err(|_| AppError::internal("Save favorite failed"))?;
    Ok(Json(MessageResponse {
        msg: "Favorite character saved",
    }))
}

async fn add_favorite_planet(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
    Json(body): Json<AddFavoritePlanetRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    require_user(&state, user_id).await?;
    if planet_repo::find_by_id(&state.db, body.planet_id)
        .await
        .map_err(|_| AppError::internal("Planet fetch failed"))?
        .is_none()
    {
        return Err(AppError::bad_request("Planet does not exist"));
    }

    favorite_repo::add_planet(&state.db, user_id, body.planet_id)
        .await
        .map_err(|_| AppError::internal("Save favorite failed"))?;
    Ok(Json(MessageResponse {
        msg: "Favorite planet saved",
    }))
}

async fn delete_favorite_character(
    State(state): State<Arc<AppState>>,
    Path(character_id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = favorite_repo::remove_first_for_character(&state.db, character_id)
        .await
        .map_err(|_| AppError::internal("Delete favorite failed"))?;
    if !deleted {
        return Err(AppError::not_found("Favorite character not found"));
    }
    Ok(Json(MessageResponse {
        msg: "Favorite character deleted",
    }))
}

async fn delete_favorite_planet(
    State(state): State<Arc<AppState>>,
    Path(planet_id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = favorite_repo::remove_first_for_planet(&state.db, planet_id)
        .await
        .map_err(|_| AppError::internal("Delete favorite failed"))?;
    if !deleted {
        return Err(AppError::not_found("Favorite planet not found"));
    }
    Ok(Json(MessageResponse {
        msg: "Favorite planet deleted",
    }))
}

async fn require_user(state: &AppState, user_id: i32) -> Result<user::Model, AppError> {
    user_repo::find_by_id(&state.db, user_id)
        .await
        .map_err(|_| AppError::internal("User fetch failed"))?
        .ok_or_else(|| AppError::not_found("User not found"))
}

impl From<favorite_character::Model> for FavoriteCharacterResponse {
    fn from(model: favorite_character::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            character_id: model.character_id,
        }
    }
}

impl From<favorite_planet::Model> for FavoritePlanetResponse {
    fn from(model: favorite_planet::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            planet_id: model.planet_id,
        }
    }
}
