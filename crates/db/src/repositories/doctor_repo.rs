//! Repository for `doctor_table`.

use clinic_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::appointment::Appointment;
use crate::models::doctor::{CreateDoctor, Doctor, DoctorDetail};
use crate::models::patient::Patient;
use crate::repositories::appointment_repo::AppointmentRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, specialty";

/// Provides CRUD operations for doctors.
pub struct DoctorRepo;

impl DoctorRepo {
    /// Insert a new doctor, returning the created row.
    ///
    /// Callers validate `input` first; a missing or malformed field still
    /// trips the table's `NOT NULL` / `CHECK` constraints.
    pub async fn create(pool: &SqlitePool, input: &CreateDoctor) -> Result<Doctor, sqlx::Error> {
        let query = format!(
            "INSERT INTO doctor_table (name, specialty)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Doctor>(&query)
            .bind(&input.name)
            .bind(&input.specialty)
            .fetch_one(pool)
            .await
    }

    /// Find a doctor by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Doctor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM doctor_table WHERE id = $1");
        sqlx::query_as::<_, Doctor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all doctors ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Doctor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM doctor_table ORDER BY id");
        sqlx::query_as::<_, Doctor>(&query).fetch_all(pool).await
    }

    /// Appointments booked with a doctor.
    pub async fn list_appointments(
        pool: &SqlitePool,
        doctor_id: DbId,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        AppointmentRepo::list_for_doctor(pool, doctor_id).await
    }

    /// Patients with at least one appointment with this doctor, ordered by id.
    pub async fn list_patients(
        pool: &SqlitePool,
        doctor_id: DbId,
    ) -> Result<Vec<Patient>, sqlx::Error> {
        sqlx::query_as::<_, Patient>(
            "SELECT DISTINCT p.id, p.name
             FROM patient_table p
             JOIN appointment_table a ON a.patient_id = p.id
             WHERE a.doctor_id = $1
             ORDER BY p.id",
        )
        .bind(doctor_id)
        .fetch_all(pool)
        .await
    }

    /// Load a doctor with its appointments, each carrying doctor and patient.
    ///
    /// Returns `None` if no doctor with the given `id` exists.
    pub async fn load_detail(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<DoctorDetail>, sqlx::Error> {
        let Some(doctor) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let appointments = AppointmentRepo::details_for_doctor(pool, id).await?;
        Ok(Some(DoctorDetail {
            doctor,
            appointments,
        }))
    }

    /// Delete a doctor by id. Its appointments go with it.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM doctor_table WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
