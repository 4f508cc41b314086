//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO validated before insert
//! - Detail structs carrying loaded relationships for serialization

pub mod appointment;
pub mod doctor;
pub mod patient;
