//! Repository for `patient_table`.

use clinic_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::appointment::Appointment;
use crate::models::doctor::Doctor;
use crate::models::patient::{CreatePatient, Patient, PatientDetail, UpdatePatient};
use crate::repositories::appointment_repo::AppointmentRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for patients.
pub struct PatientRepo;

impl PatientRepo {
    /// Insert a new patient, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreatePatient) -> Result<Patient, sqlx::Error> {
        let query = format!(
            "INSERT INTO patient_table (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a patient by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patient_table WHERE id = $1");
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all patients ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Patient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patient_table ORDER BY id");
        sqlx::query_as::<_, Patient>(&query).fetch_all(pool).await
    }

    /// Update a patient. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdatePatient,
    ) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!(
            "UPDATE patient_table SET
                name = COALESCE($2, name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Appointments booked by a patient.
    pub async fn list_appointments(
        pool: &SqlitePool,
        patient_id: DbId,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        AppointmentRepo::list_for_patient(pool, patient_id).await
    }

    /// Doctors this patient has at least one appointment with, ordered by id.
    pub async fn list_doctors(
        pool: &SqlitePool,
        patient_id: DbId,
    ) -> Result<Vec<Doctor>, sqlx::Error> {
        sqlx::query_as::<_, Doctor>(
            "SELECT DISTINCT d.id, d.name, d.specialty
             FROM doctor_table d
             JOIN appointment_table a ON a.doctor_id = d.id
             WHERE a.patient_id = $1
             ORDER BY d.id",
        )
        .bind(patient_id)
        .fetch_all(pool)
        .await
    }

    /// Load a patient with its appointments, each carrying doctor and patient.
    ///
    /// Returns `None` if no patient with the given `id` exists.
    pub async fn load_detail(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<PatientDetail>, sqlx::Error> {
        let Some(patient) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let appointments = AppointmentRepo::details_for_patient(pool, id).await?;
        Ok(Some(PatientDetail {
            patient,
            appointments,
        }))
    }

    /// Delete a patient by id. Its appointments go with it.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM patient_table WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
