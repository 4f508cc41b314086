//! Appointment entity model and DTOs.

use clinic_core::serialize::{columns_of, Record, Relation};
use clinic_core::types::DbId;
use clinic_core::validation::validate_day;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use validator::Validate;

use crate::models::doctor::Doctor;
use crate::models::patient::Patient;

/// Rules applied whenever an appointment is serialized with its parties.
pub const APPOINTMENT_RULES: &[&str] = &["-patient.appointments", "-doctor.appointments"];

/// A row from `appointment_table`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    pub day: String,
    pub doctor_id: DbId,
    pub patient_id: DbId,
}

impl Record for Appointment {
    fn fields(&self) -> Map<String, Value> {
        columns_of(self)
    }
}

/// DTO for booking an appointment.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateAppointment {
    #[validate(required, custom(function = "validate_day"))]
    pub day: Option<String>,
    #[validate(required)]
    pub doctor_id: Option<DbId>,
    #[validate(required)]
    pub patient_id: Option<DbId>,
}

/// An appointment together with the doctor and patient it links.
#[derive(Debug, Clone)]
pub struct AppointmentDetail {
    pub appointment: Appointment,
    pub doctor: Doctor,
    pub patient: Patient,
}

impl Record for AppointmentDetail {
    fn fields(&self) -> Map<String, Value> {
        columns_of(&self.appointment)
    }

    fn relations(&self) -> Vec<(&'static str, Relation<'_>)> {
        vec![
            ("doctor", Relation::One(&self.doctor)),
            ("patient", Relation::One(&self.patient)),
        ]
    }

    fn default_rules(&self) -> &'static [&'static str] {
        APPOINTMENT_RULES
    }
}
