//! Dialog components for TUI

mod alert_dialog;
mod base;
mod error_dialog;

pub use alert_dialog::render_alert_dialog;
pub use error_dialog::render_error_dialog;
