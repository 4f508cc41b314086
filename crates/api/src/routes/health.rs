//! Liveness check for the clinic service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }

    /// 503 while the clinic store is unreachable.
    fn status_code(&self) -> StatusCode {
        if self.db_healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let health = match clinic_db::health_check(&state.pool).await {
        Ok(()) => HealthResponse::new(true),
        Err(err) => {
            tracing::warn!(error = %err, "Clinic store unreachable");
            HealthResponse::new(false)
        }
    };
    (health.status_code(), Json(health))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
