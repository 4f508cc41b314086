//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input, delegate to the corresponding repository in
//! `clinic_db`, serialize the result under the resource's rules and map
//! errors via [`AppError`](crate::error::AppError).

pub mod appointment;
pub mod doctor;
pub mod patient;

/// GET /
pub async fn index() -> &'static str {
    "doctor/patient"
}
