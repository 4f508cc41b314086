//! Route definitions for the `/appointments` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::appointment;
use crate::state::AppState;

/// Appointment routes mounted at `/appointments`.
///
/// ```text
/// POST   /                  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(appointment::create))
}
