//! Domain building blocks shared by the storage and HTTP layers.
//!
//! Nothing in this crate touches the database: ids, domain errors,
//! field validators and the rule-driven record serializer.

pub mod error;
pub mod serialize;
pub mod types;
pub mod validation;
