//! Form domain layer
//!
//! Masking, validation and the conditional-group state machine behind the
//! phone form, with no dependency on rendering.

pub mod conditional;
mod field;
mod form_state;
pub mod phone;
pub mod validation;

pub use conditional::Scenario;
pub use field::{AccessibilityAttrs, ChoiceOption, Destination, FieldId, Vehicle};
#[cfg(test)]
pub use field::{Answer, FieldMeta};
pub use form_state::{Focus, Form, FormValues, PhoneForm};
pub use validation::FieldError;
