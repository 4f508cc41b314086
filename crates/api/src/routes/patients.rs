//! Route definitions for the `/patients` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::patient;
use crate::state::AppState;

/// Patient routes mounted at `/patients`.
///
/// ```text
/// GET    /{id}              -> get_by_id
/// PATCH  /{id}              -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(patient::get_by_id).patch(patient::update))
}
