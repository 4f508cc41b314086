//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Every write is a single
//! statement, committed on its own.

pub mod appointment_repo;
pub mod doctor_repo;
pub mod patient_repo;

pub use appointment_repo::AppointmentRepo;
pub use doctor_repo::DoctorRepo;
pub use patient_repo::PatientRepo;
