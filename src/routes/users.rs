use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    db::{entities::user, user_repo},
    error::AppError,
    state::AppState,
};

/// The password column stays out of every serialized user.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/user", get(list_users))
        .with_state(state)
}

async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = user_repo::list_users(&state.db)
        .await
        .map_err(|_| AppError::internal("User fetch failed"))?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
        }
    }
}
