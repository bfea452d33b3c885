#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use rentavid_api::config::ServerConfig;
use rentavid_api::router::build_app_router;
use rentavid_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a language and return its id.
pub async fn create_language(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/languages",
        serde_json::json!({ "name": name }),
    )
    .await;
    body_json(response).await["language_id"].as_i64().unwrap()
}

/// Create a film with the given attributes and return its id.
pub async fn create_film(
    pool: &PgPool,
    title: &str,
    language_id: i64,
    release_year: i32,
    rental_rate: f64,
    rating: &str,
) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/films",
        film_body(title, language_id, release_year, rental_rate, rating),
    )
    .await;
    body_json(response).await["film_id"].as_i64().unwrap()
}

pub fn film_body(
    title: &str,
    language_id: i64,
    release_year: i32,
    rental_rate: f64,
    rating: &str,
) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": null,
        "backdrop_path": null,
        "poster_path": null,
        "release_year": release_year,
        "language_id": language_id,
        "rental_duration": 3,
        "rental_rate": rental_rate,
        "length": 90,
        "replacement_cost": 19.99,
        "rating": rating,
    })
}

pub async fn create_category(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/categories",
        serde_json::json!({ "name": name }),
    )
    .await;
    body_json(response).await["category_id"].as_i64().unwrap()
}

pub async fn link_category(pool: &PgPool, film_id: i64, category_id: i64) {
    post_json(
        build_test_app(pool.clone()),
        "/film-categories",
        serde_json::json!({ "film_id": film_id, "category_id": category_id }),
    )
    .await;
}
