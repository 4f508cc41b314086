//! Field validators run whenever a value is assigned to a validated field.
//!
//! Each validator returns a [`ValidationError`] naming the failed rule. DTOs
//! attach them with `#[validate(custom(function = ...))]`.

use std::borrow::Cow;

use validator::ValidationError;

/// Days on which appointments can be booked.
pub const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Literal prefix every doctor name must carry.
pub const DOCTOR_NAME_PREFIX: &str = "Dr.";

/// Appointment days must be one of [`WEEKDAYS`], matched exactly.
pub fn validate_day(day: &str) -> Result<(), ValidationError> {
    if WEEKDAYS.contains(&day) {
        Ok(())
    } else {
        Err(ValidationError::new("weekday").with_message(Cow::Borrowed(
            "Invalid day. Must be between Monday and Friday.",
        )))
    }
}

/// Doctor names must start with [`DOCTOR_NAME_PREFIX`].
pub fn validate_doctor_name(name: &str) -> Result<(), ValidationError> {
    if name.starts_with(DOCTOR_NAME_PREFIX) {
        Ok(())
    } else {
        Err(ValidationError::new("doctor_name_prefix")
            .with_message(Cow::Borrowed("Doctor's name must start with 'Dr.'")))
    }
}
