//! Doctor entity model and DTOs.

use clinic_core::serialize::{columns_of, Record, Relation};
use clinic_core::types::DbId;
use clinic_core::validation::validate_doctor_name;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use validator::Validate;

use crate::models::appointment::AppointmentDetail;
use crate::models::patient::Patient;

/// Rules applied whenever a doctor is serialized with its appointments.
pub const DOCTOR_RULES: &[&str] = &["-appointments.doctor"];

/// A row from `doctor_table`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Doctor {
    pub id: DbId,
    pub name: String,
    pub specialty: String,
}

impl Record for Doctor {
    fn fields(&self) -> Map<String, Value> {
        columns_of(self)
    }
}

/// DTO for creating a doctor. Fields are optional so that a missing value
/// is reported as a validation failure rather than a body parse error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateDoctor {
    #[validate(required, custom(function = "validate_doctor_name"))]
    pub name: Option<String>,
    #[validate(required)]
    pub specialty: Option<String>,
}

/// A doctor together with its appointments (each with doctor and patient).
#[derive(Debug, Clone)]
pub struct DoctorDetail {
    pub doctor: Doctor,
    pub appointments: Vec<AppointmentDetail>,
}

impl DoctorDetail {
    /// A freshly created doctor has no appointments yet.
    pub fn new(doctor: Doctor) -> Self {
        Self {
            doctor,
            appointments: Vec::new(),
        }
    }

    /// Patients seen by this doctor, derived through its appointments.
    ///
    /// Each patient appears once, ordered by id.
    pub fn patients(&self) -> Vec<&Patient> {
        let mut patients: Vec<&Patient> = self.appointments.iter().map(|a| &a.patient).collect();
        patients.sort_by_key(|p| p.id);
        patients.dedup_by_key(|p| p.id);
        patients
    }
}

impl Record for DoctorDetail {
    fn fields(&self) -> Map<String, Value> {
        columns_of(&self.doctor)
    }

    fn relations(&self) -> Vec<(&'static str, Relation<'_>)> {
        vec![(
            "appointments",
            Relation::Many(
                self.appointments
                    .iter()
                    .map(|a| a as &dyn Record)
                    .collect(),
            ),
        )]
    }

    fn default_rules(&self) -> &'static [&'static str] {
        DOCTOR_RULES
    }
}
