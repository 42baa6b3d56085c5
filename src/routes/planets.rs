use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;

use crate::{
    db::{entities::planet, planet_repo},
    error::AppError,
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub population: String,
    pub terrain: String,
    pub climate: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/planet", get(list_planets))
        .route("/planet/{id}", get(planet_detail))
        .with_state(state)
}

async fn list_planets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlanetResponse>>, AppError> {
    let planets = planet_repo::list_planets(&state.db)
        .await
        .map_err(|_| AppError::internal("Planet fetch failed"))?;
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

async fn planet_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<PlanetResponse>, AppError> {
    let planet = planet_repo::find_by_id(&state.db, id)
        .await
        .map_err(|_| AppError::internal("Planet fetch failed"))?
        .ok_or_else(|| AppError::not_found("Planet not found"))?;
    Ok(Json(planet.into()))
}

impl From<planet::Model> for PlanetResponse {
    fn from(model: planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            population: model.population,
            terrain: model.terrain,
            climate: model.climate,
        }
    }
}
