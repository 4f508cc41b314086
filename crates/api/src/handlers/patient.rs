//! Handlers for the `/patients` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use clinic_core::error::CoreError;
use clinic_core::serialize::Record;
use clinic_core::types::DbId;
use clinic_db::models::patient::UpdatePatient;
use clinic_db::repositories::PatientRepo;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Patients are shown without their appointments; doctors are listed instead.
const PATIENT_RULES: &[&str] = &["-appointments"];

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Patient",
        id,
    })
}

/// GET /patients/{id}
///
/// Returns the patient plus a `doctors` array derived from its appointments.
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Map<String, Value>>> {
    let Path(id) = id?;
    let patient = PatientRepo::load_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let doctors = patient
        .doctors()
        .into_iter()
        .map(|d| Value::Object(d.to_dict(PATIENT_RULES)))
        .collect();

    let mut body = patient.to_dict(PATIENT_RULES);
    body.insert("doctors".to_string(), Value::Array(doctors));
    Ok(Json(body))
}

/// PATCH /patients/{id}
///
/// Applies every key of the JSON body as a field assignment; keys that are
/// not patient columns are skipped. A missing patient and any failure along
/// the way both answer 404, the latter with the reason as the error text.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> AppResult<Json<Map<String, Value>>> {
    let Path(id) = id?;
    let Json(fields) = payload.map_err(|rejection| AppError::PatchFailed(rejection.body_text()))?;

    let patient = PatientRepo::find_by_id(&state.pool, id)
        .await
        .map_err(patch_failed)?
        .ok_or_else(|| not_found(id))?;

    let update = UpdatePatient::from_fields(&fields).map_err(patch_failed)?;

    let patient = PatientRepo::update(&state.pool, patient.id, &update)
        .await
        .map_err(patch_failed)?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(patient_id = patient.id, "Patient updated");

    Ok(Json(patient.to_dict(PATIENT_RULES)))
}

fn patch_failed(err: impl std::fmt::Display) -> AppError {
    AppError::PatchFailed(err.to_string())
}
