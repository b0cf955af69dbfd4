//! Submission alert dialog

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render the one-time confirmation shown after a successful submit
pub fn render_alert_dialog(frame: &mut Frame, message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Submitted",
            accent: Color::Green,
            message,
            hint: dismiss_hint(),
            max_width: 70,
        },
    );
}
