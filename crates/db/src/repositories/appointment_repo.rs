//! Repository for `appointment_table`.

use clinic_core::types::DbId;
use sqlx::{FromRow, SqlitePool};

use crate::models::appointment::{Appointment, AppointmentDetail, CreateAppointment};
use crate::models::doctor::Doctor;
use crate::models::patient::Patient;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, day, doctor_id, patient_id";

/// Appointment joined with both parties, flattened into one row.
const DETAIL_SELECT: &str = "SELECT
        a.id, a.day, a.doctor_id, a.patient_id,
        d.name AS doctor_name, d.specialty AS doctor_specialty,
        p.name AS patient_name
     FROM appointment_table a
     JOIN doctor_table d ON d.id = a.doctor_id
     JOIN patient_table p ON p.id = a.patient_id";

#[derive(FromRow)]
struct DetailRow {
    id: DbId,
    day: String,
    doctor_id: DbId,
    patient_id: DbId,
    doctor_name: String,
    doctor_specialty: String,
    patient_name: String,
}

impl From<DetailRow> for AppointmentDetail {
    fn from(row: DetailRow) -> Self {
        Self {
            appointment: Appointment {
                id: row.id,
                day: row.day,
                doctor_id: row.doctor_id,
                patient_id: row.patient_id,
            },
            doctor: Doctor {
                id: row.doctor_id,
                name: row.doctor_name,
                specialty: row.doctor_specialty,
            },
            patient: Patient {
                id: row.patient_id,
                name: row.patient_name,
            },
        }
    }
}

/// Provides CRUD operations for appointments.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// Insert a new appointment, returning the created row.
    ///
    /// A `doctor_id` / `patient_id` that references no row fails with a
    /// foreign key violation.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateAppointment,
    ) -> Result<Appointment, sqlx::Error> {
        let query = format!(
            "INSERT INTO appointment_table (day, doctor_id, patient_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(&input.day)
            .bind(input.doctor_id)
            .bind(input.patient_id)
            .fetch_one(pool)
            .await
    }

    /// Find an appointment by id.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appointment_table WHERE id = $1");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all appointments ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Appointment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appointment_table ORDER BY id");
        sqlx::query_as::<_, Appointment>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_for_doctor(
        pool: &SqlitePool,
        doctor_id: DbId,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM appointment_table WHERE doctor_id = $1 ORDER BY id");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(doctor_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_for_patient(
        pool: &SqlitePool,
        patient_id: DbId,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM appointment_table WHERE patient_id = $1 ORDER BY id");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(patient_id)
            .fetch_all(pool)
            .await
    }

    /// Load an appointment with its doctor and patient.
    pub async fn load_detail(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<AppointmentDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE a.id = $1");
        let row = sqlx::query_as::<_, DetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(AppointmentDetail::from))
    }

    pub(crate) async fn details_for_doctor(
        pool: &SqlitePool,
        doctor_id: DbId,
    ) -> Result<Vec<AppointmentDetail>, sqlx::Error> {
        Self::details_where(pool, "a.doctor_id", doctor_id).await
    }

    pub(crate) async fn details_for_patient(
        pool: &SqlitePool,
        patient_id: DbId,
    ) -> Result<Vec<AppointmentDetail>, sqlx::Error> {
        Self::details_where(pool, "a.patient_id", patient_id).await
    }

    async fn details_where(
        pool: &SqlitePool,
        column: &'static str,
        id: DbId,
    ) -> Result<Vec<AppointmentDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE {column} = $1 ORDER BY a.id");
        let rows = sqlx::query_as::<_, DetailRow>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(AppointmentDetail::from).collect())
    }

    /// Delete an appointment by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appointment_table WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
