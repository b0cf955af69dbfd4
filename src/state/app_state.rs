//! Application state definitions

use super::forms::PhoneForm;
use std::collections::VecDeque;

/// Message shown in the status region after a successful submit
pub const SUCCESS_MESSAGE: &str = "Form is filled successfully!";

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The phone form
    pub form: PhoneForm,
    /// One-time confirmation shown in a modal after submit
    pub alert: Option<String>,
    /// Status region text
    pub status_message: Option<String>,
    /// Whether the form-state inspector is shown
    pub show_devtools: bool,
    /// Pending error messages, shown one at a time
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(form: PhoneForm, show_devtools: bool) -> Self {
        Self {
            form,
            show_devtools,
            ..Default::default()
        }
    }

    /// Queue an error for display
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently on screen
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Whether a modal dialog is capturing input
    pub fn has_modal(&self) -> bool {
        self.alert.is_some() || self.has_errors()
    }
}
