//! Handlers for the `/doctors` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use clinic_core::error::CoreError;
use clinic_core::serialize::Record;
use clinic_core::types::DbId;
use clinic_db::models::doctor::{CreateDoctor, DoctorDetail};
use clinic_db::repositories::DoctorRepo;
use serde_json::{Map, Value};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Doctors in a listing never carry their appointments.
const LIST_RULES: &[&str] = &["-appointments"];

/// A single doctor shows appointments without the foreign keys.
const DETAIL_RULES: &[&str] = &["-appointments.patient_id", "-appointments.doctor_id"];

/// GET /doctors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Map<String, Value>>>> {
    let doctors = DoctorRepo::list(&state.pool).await?;
    Ok(Json(
        doctors.iter().map(|d| d.to_dict(LIST_RULES)).collect(),
    ))
}

/// POST /doctors
///
/// The name must start with `Dr.`; any failure, including a body that does
/// not parse, is reported as a generic validation error.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateDoctor>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Map<String, Value>>)> {
    let Json(input) = payload?;
    input.validate().map_err(CoreError::from)?;

    let doctor = DoctorRepo::create(&state.pool, &input).await?;
    tracing::info!(doctor_id = doctor.id, name = %doctor.name, "Doctor created");

    Ok((
        StatusCode::CREATED,
        Json(DoctorDetail::new(doctor).to_dict(&[])),
    ))
}

/// GET /doctors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Map<String, Value>>> {
    let Path(id) = id?;
    let doctor = DoctorRepo::load_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Doctor",
            id,
        }))?;
    Ok(Json(doctor.to_dict(DETAIL_RULES)))
}
