//! Handlers for the `/appointments` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use clinic_core::error::CoreError;
use clinic_core::serialize::Record;
use clinic_db::models::appointment::CreateAppointment;
use clinic_db::repositories::AppointmentRepo;
use serde_json::{Map, Value};
use validator::Validate;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /appointments
///
/// The day must be a weekday and both parties must exist; any failure is
/// reported as a generic validation error. So is a body that does not parse.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateAppointment>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Map<String, Value>>)> {
    let Json(input) = payload?;
    input.validate().map_err(CoreError::from)?;

    let appointment = AppointmentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        appointment_id = appointment.id,
        doctor_id = appointment.doctor_id,
        patient_id = appointment.patient_id,
        day = %appointment.day,
        "Appointment created",
    );

    let detail = AppointmentRepo::load_detail(&state.pool, appointment.id)
        .await?
        .ok_or_else(|| {
            CoreError::Internal(format!("appointment {} missing after insert", appointment.id))
        })?;

    Ok((StatusCode::CREATED, Json(detail.to_dict(&[]))))
}
