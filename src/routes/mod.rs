use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub mod characters;
pub mod favorites;
pub mod planets;
pub mod route_list;
pub mod users;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(route_list::router())
        .merge(characters::router(state.clone()))
        .merge(planets::router(state.clone()))
        .merge(users::router(state.clone()))
        .merge(favorites::router(state))
}
