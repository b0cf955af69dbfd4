//! Field validators
//!
//! Each validator returns the first failing rule. Rules run in the order
//! required, pattern, custom checks.

use super::field::{Answer, Vehicle};
use super::phone;
use std::collections::BTreeSet;
use thiserror::Error;

/// Validation failure shown inline next to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Please confirm your phone number")]
    ConfirmRequired,
    #[error("Invalid format. Please follow the format (###)-###-####")]
    InvalidFormat,
    #[error("Phone number must not start with 0 or 1")]
    InvalidStartDigit,
    #[error("Phone numbers do not match")]
    Mismatch,
    #[error("Please select a choice")]
    ChoiceRequired,
    #[error("Please select at least one vehicle")]
    VehicleRequired,
}

fn check_phone_shape(value: &str) -> Result<(), FieldError> {
    if !phone::is_complete(value) {
        return Err(FieldError::InvalidFormat);
    }
    if !phone::has_valid_start_digit(value) {
        return Err(FieldError::InvalidStartDigit);
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::PhoneRequired);
    }
    check_phone_shape(value)
}

/// Validate the confirmation against the primary phone value
pub fn validate_confirm_phone(value: &str, phone_value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::ConfirmRequired);
    }
    check_phone_shape(value)?;
    if phone::digits(value) != phone::digits(phone_value) {
        return Err(FieldError::Mismatch);
    }
    Ok(())
}

pub fn validate_choice(answer: Option<Answer>) -> Result<(), FieldError> {
    answer.map(|_| ()).ok_or(FieldError::ChoiceRequired)
}

pub fn validate_vehicle(selected: &BTreeSet<Vehicle>, required: bool) -> Result<(), FieldError> {
    if required && selected.is_empty() {
        return Err(FieldError::VehicleRequired);
    }
    Ok(())
}
