//! Form rendering module
//!
//! This module contains UI components for rendering the phone form:
//! - `field_renderer`: Text inputs and inline alerts
//! - `choice_group`: Radio and checkbox groups
//! - `phone_form`: The full form layout

mod choice_group;
mod field_renderer;
mod phone_form;

pub use phone_form::draw_phone_form;
