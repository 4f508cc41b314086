#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use clinic_api::config::ServerConfig;
use clinic_api::router::build_app_router;
use clinic_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), false).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body.to_string()), true).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Body::from(body.to_string()), true).await
}

/// POST with a raw body, for malformed-payload tests.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body), true).await
}

/// PATCH with a raw body, for malformed-payload tests.
pub async fn patch_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    send(app, Method::PATCH, uri, Body::from(body), true).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body, json: bool) -> Response<Body> {
    let mut request = Request::builder().method(method).uri(uri);
    if json {
        request = request.header("content-type", "application/json");
    }
    app.oneshot(request.body(body).unwrap()).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a doctor through the API and return its id.
pub async fn create_doctor(pool: &SqlitePool, name: &str, specialty: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/doctors",
        serde_json::json!({"name": name, "specialty": specialty}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Insert a patient directly; there is no POST /patients endpoint.
pub async fn create_patient(pool: &SqlitePool, name: &str) -> i64 {
    let input = clinic_db::models::patient::CreatePatient {
        name: Some(name.to_string()),
    };
    clinic_db::repositories::PatientRepo::create(pool, &input)
        .await
        .unwrap()
        .id
}

/// Book an appointment through the API and return its id.
pub async fn create_appointment(pool: &SqlitePool, day: &str, doctor_id: i64, patient_id: i64) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/appointments",
        serde_json::json!({"day": day, "doctor_id": doctor_id, "patient_id": patient_id}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
