use axum::{Json, Router, routing::get};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub request: &'static str,
    pub response: &'static str,
}

const ROUTES: &[RouteInfo] = &[
    RouteInfo {
        method: "GET",
        path: "/character",
        request: "",
        response: "[{id, name, gender, height}]",
    },
    RouteInfo {
        method: "GET",
        path: "/character/{id}",
        request: "",
        response: "{id, name, gender, height}",
    },
    RouteInfo {
        method: "GET",
        path: "/planet",
        request: "",
        response: "[{id, name, population, terrain, climate}]",
    },
    RouteInfo {
        method: "GET",
        path: "/planet/{id}",
        request: "",
        response: "{id, name, population, terrain, climate}",
    },
    RouteInfo {
        method: "GET",
        path: "/user",
        request: "",
        response: "[{id, email}]",
    },
    RouteInfo {
        method: "GET",
        path: "/user/favorites",
        request: "{user: {id}}",
        response: "{favoritePlanets, favoriteCharacters}",
    },
    RouteInfo {
        method: "POST",
        path: "/users/{user_id}/favorites",
        request: "{character_id}",
        response: "{msg}",
    },
    RouteInfo {
        method: "POST",
        path: "/users/{user_id}/planet/favorites",
        request: "{planet_id}",
        response: "{msg}",
    },
    RouteInfo {
        method: "DELETE",
        path: "/favorite/people/{character_id}",
        request: "",
        response: "{msg}",
    },
    RouteInfo {
        method: "DELETE",
        path: "/favorite/planet/{planet_id}",
        request: "",
        response: "{msg}",
    },
];

pub fn routes() -> &'static [RouteInfo] {
    ROUTES
}

pub fn router() -> Router {
    Router::new().route("/", get(list_routes))
}

async fn list_routes() -> Json<&'static [RouteInfo]> {
    Json(routes())
}
