#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use fyyur_api::config::ServerConfig;
use fyyur_api::router::build_app_router;
use fyyur_api::state::AppState;

/// Build a test `ServerConfig` matching the dev defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, with the production middleware
/// stack, over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn venue_body(name: &str, city: &str, state: &str) -> Value {
    json!({
        "name": name,
        "city": city,
        "state": state,
        "address": "1015 Folsom Street",
        "phone": "123-123-1234",
        "genres": ["Jazz", "Reggae"],
        "seeking_talent": true,
        "seeking_description": "Looking for local acts",
    })
}

pub fn artist_body(name: &str) -> Value {
    json!({
        "name": name,
        "city": "San Francisco",
        "state": "CA",
        "phone": "326-123-5000",
        "genres": ["Rock n Roll"],
        "image_link": format!("https://img.example/{name}.jpg"),
    })
}

/// Create a venue through the API and return its id.
pub async fn create_venue(pool: &PgPool, name: &str, city: &str, state: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/venues", venue_body(name, city, state)).await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create an artist through the API and return its id.
pub async fn create_artist(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/artists", artist_body(name)).await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Book a show through the API and return the response.
pub async fn book_show(
    pool: &PgPool,
    artist_id: i64,
    venue_id: i64,
    start_time: &str,
) -> Response<Body> {
    let app = build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/shows",
        json!({
            "artist_id": artist_id,
            "venue_id": venue_id,
            "start_time": start_time,
        }),
    )
    .await
}
