pub mod appointments;
pub mod doctors;
pub mod health;
pub mod patients;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                       index (plain text)
/// /doctors                list, create
/// /doctors/{id}           get with appointments
/// /patients/{id}          get with doctors, patch
/// /appointments           create
/// ```
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index))
        .nest("/doctors", doctors::router())
        .nest("/patients", patients::router())
        .nest("/appointments", appointments::router())
}
