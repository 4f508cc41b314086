//! Patient entity model and DTOs.

use clinic_core::serialize::{columns_of, Record, Relation};
use clinic_core::types::DbId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use validator::Validate;

use crate::models::appointment::AppointmentDetail;
use crate::models::doctor::Doctor;

/// Rules applied whenever a patient is serialized with its appointments.
pub const PATIENT_RULES: &[&str] = &["-appointments.patient"];

/// A row from `patient_table`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Patient {
    pub id: DbId,
    pub name: String,
}

impl Record for Patient {
    fn fields(&self) -> Map<String, Value> {
        columns_of(self)
    }
}

/// DTO for creating a patient.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePatient {
    #[validate(required)]
    pub name: Option<String>,
}

/// DTO for updating an existing patient. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePatient {
    pub name: Option<String>,
}

/// Why a field assignment on a patient was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("Patient field '{0}' is read-only")]
    ReadOnly(String),

    #[error("Patient field '{field}' must be a {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("Patient field '{0}' must not be null")]
    NotNull(String),
}

impl UpdatePatient {
    /// Build an update by assigning each `key: value` pair in turn.
    ///
    /// Keys that name no patient column are ignored. The first refused
    /// assignment aborts the whole update.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, PatchError> {
        let mut update = Self::default();
        for (key, value) in fields {
            update.assign(key, value)?;
        }
        Ok(update)
    }

    fn assign(&mut self, key: &str, value: &Value) -> Result<(), PatchError> {
        match key {
            "id" => Err(PatchError::ReadOnly(key.to_string())),
            "name" => match value {
                Value::String(name) => {
                    self.name = Some(name.clone());
                    Ok(())
                }
                Value::Null => Err(PatchError::NotNull(key.to_string())),
                _ => Err(PatchError::WrongType {
                    field: key.to_string(),
                    expected: "string",
                }),
            },
            _ => Ok(()),
        }
    }
}

/// A patient together with its appointments (each with doctor and patient).
#[derive(Debug, Clone)]
pub struct PatientDetail {
    pub patient: Patient,
    pub appointments: Vec<AppointmentDetail>,
}

impl PatientDetail {
    /// Doctors this patient has appointments with.
    ///
    /// Each doctor appears once, ordered by id.
    pub fn doctors(&self) -> Vec<&Doctor> {
        let mut doctors: Vec<&Doctor> = self.appointments.iter().map(|a| &a.doctor).collect();
        doctors.sort_by_key(|d| d.id);
        doctors.dedup_by_key(|d| d.id);
        doctors
    }
}

impl Record for PatientDetail {
    fn fields(&self) -> Map<String, Value> {
        columns_of(&self.patient)
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
        PATIENT_RULES
    }
}
