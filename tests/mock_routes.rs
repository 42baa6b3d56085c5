use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
};
use sea_orm::MockExecResult;
use serde_json::json;
use tower::ServiceExt;

use starwars_api::{
    db::entities::{character, favorite_character, favorite_planet, planet, user},
    db::entity_catalog,
    test_helpers::{mock_db, test_router},
};

async fn json_response(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.expect("request should succeed");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("body should be json");
    (status, json)
}

fn luke() -> character::Model {
    character::Model {
        id: 1,
        name: "Luke".to_string(),
        gender: "male".to_string(),
        height: 172,
        mass: 77,
        eye_color: "blue".to_string(),
    }
}

fn tatooine() -> planet::Model {
    planet::Model {
        id: 1,
        name: "Tatooine".to_string(),
        population: "200000".to_string(),
        terrain: "desert".to_string(),
        climate: "arid".to_string(),
    }
}

fn demo_user() -> user::Model {
    user::Model {
        id: 5,
        email: "demo@example.com".to_string(),
        password: "hunter2".to_string(),
        is_active: true,
    }
}

#[tokio::test]
async fn route_index_lists_api_routes() {
    let app = test_router(mock_db().into_connection());
    let (status, json) = json_response(
        app,
        Request::builder().uri("/").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let routes = json.as_array().expect("route index should be an array");
    assert!(routes.iter().any(|route| {
        route["method"] == "GET" && route["path"] == "/character"
    }));
    assert!(routes.iter().any(|route| {
        route["method"] == "DELETE" && route["path"] == "/favorite/planet/{planet_id}"
    }));
}

#[test]
fn entity_catalog_names_all_five_tables() {
    let tables: Vec<&str> = entity_catalog::entities()
        .iter()
        .map(|entity| entity.table)
        .collect();
    for table in [
        "users",
        "characters",
        "planets",
        "favorite_characters",
        "favorite_planets",
    ] {
        assert!(tables.contains(&table), "missing table {table}");
    }
}

#[tokio::test]
async fn character_list_serializes_fixed_fields() {
    let db = mock_db()
        .append_query_results([vec![luke()]])
        .into_connection();

    let (status, json) = json_response(
        test_router(db),
        Request::builder()
            .uri("/character")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // mass and eye_color are stored but never serialized
    assert_eq!(
        json,
        json!([{ "id": 1, "name": "Luke", "gender": "male", "height": 172 }])
    );
}

#[tokio::test]
async fn character_detail_missing_returns_404() {
    let db = mock_db()
        .append_query_results([Vec::<character::Model>::new()])
        .into_connection();

    let (status, json) = json_response(
        test_router(db),
        Request::builder()
            .uri("/character/42")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Character not found");
}

#[tokio::test]
async fn planet_detail_serializes_fixed_fields() {
    let db = mock_db()
        .append_query_results([vec![tatooine()]])
        .into_connection();

    let (status, json) = json_response(
        test_router(db),
        Request::builder()
            .uri("/planet/1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "id": 1,
            "name": "Tatooine",
            "population": "200000",
            "terrain": "desert",
            "climate": "arid"
        })
    );
}

#[tokio::test]
async fn user_list_never_includes_password() {
    let db = mock_db()
        .append_query_results([vec![demo_user()]])
        .into_connection();

    let (status, json) = json_response(
        test_router(db),
        Request::builder().uri("/user").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([{ "id": 5, "email": "demo@example.com" }]));
}

#[tokio::test]
async fn user_favorites_unknown_user_keeps_legacy_body() {
    let db = mock_db()
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    let (status, json) = json_response(
        test_router(db),
        Request::builder()
            .uri("/user/favorites")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "user": { "id": 99 } }).to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!("User do not exist"));
}

#[tokio::test]
async fn user_favorites_returns_both_lists() {
    let db = mock_db()
        .append_query_results([vec![demo_user()]])
        .append_query_results([vec![favorite_planet::Model {
            id: 3,
            user_id: 5,
            planet_id: 1,
        }]])
        .append_query_results([vec![favorite_character::Model {
            id: 7,
            user_id: 5,
            character_id: 1,
        }]])
        .into_connection();

    let (status, json) = json_response(
        test_router(db),
        Request::builder()
            .uri("/user/favorites")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "user": { "id": 5 } }).to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "favoritePlanets": [{ "id": 3, "user_id": 5, "planet_id": 1 }],
            "favoriteCharacters": [{ "id": 7, "user_id": 5, "character_id": 1 }]
        })
    );
}

#[tokio::test]
async fn add_favorite_character_saves() {
    let db = mock_db()
        .append_query_results([vec![demo_user()]])
        .append_query_results([vec![luke()]])
        .append_query_results([vec![favorite_character::Model {
            id: 1,
            user_id: 5,
            character_id: 1,
        }]])
        .into_connection();

    let (status, json) = json_response(
        test_router(db),
        Request::builder()
            .method("POST")
            .uri("/users/5/favorites")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "character_id": 1 }).to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "msg": "Favorite character saved" }));
}

#[tokio::test]
async fn add_favorite_character_unknown_user_is_404() {
    let db = mock_db()
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    let (status, json) = json_response(
        test_router(db),
        Request::builder()
            .method("POST")
            .uri("/users/99/favorites")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "character_id": 1 }).to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "User not found");
}

#[tokio::test]
async fn add_favorite_character_unknown_character_is_400() {
    let db = mock_db()
        .append_query_results([vec![demo_user()]])
        .append_query_results([Vec::<character::Model>::new()])
        .into_connection();

    let (status, json) = json_response(
        test_router(db),
        Request::builder()
            .method("POST")
            .uri("/users/5/favorites")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "character_id": 42 }).to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Character does not exist");
}

#[tokio::test]
async fn add_favorite_planet_saves() {
    let db = mock_db()
        .append_query_results([vec![demo_user()]])
        .append_query_results([vec![tatooine()]])
        .append_query_results([vec![favorite_planet::Model {
            id: 1,
            user_id: 5,
            planet_id: 1,
        }]])
        .into_connection();

    let (status, json) = json_response(
        test_router(db),
        Request::builder()
            .method("POST")
            .uri("/users/5/planet/favorites")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "planet_id": 1 }).to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "msg": "Favorite planet saved" }));
}

#[tokio::test]
async fn delete_favorite_character_removes_first_match() {
    let db = mock_db()
        .append_query_results([vec![favorite_character::Model {
            id: 7,
            user_id: 5,
            character_id: 1,
        }]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let (status, json) = json_response(
        test_router(db),
        Request::builder()
            .method("DELETE")
            .uri("/favorite/people/1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "msg": "Favorite character deleted" }));
}

#[tokio::test]
async fn delete_favorite_character_missing_is_404() {
    let db = mock_db()
        .append_query_results([Vec::<favorite_character::Model>::new()])
        .into_connection();

    let (status, json) = json_response(
        test_router(db),
        Request::builder()
            .method("DELETE")
            .uri("/favorite/people/42")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Favorite character not found");
}

#[tokio::test]
async fn delete_favorite_planet_missing_is_404() {
    let db = mock_db()
        .append_query_results([Vec::<favorite_planet::Model>::new()])
        .into_connection();

    let (status, json) = json_response(
        test_router(db),
        Request::builder()
            .method("DELETE")
            .uri("/favorite/planet/42")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Favorite planet not found");
}
