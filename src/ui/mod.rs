//! UI module for rendering the TUI

mod components;
mod devtools;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area(), app.state.show_devtools);

    layout::draw_header(frame, screen.header);
    forms::draw_phone_form(frame, screen.form, &app.state.form);
    if let Some(area) = screen.devtools {
        devtools::draw(frame, area, &app.state.form);
    }
    layout::draw_status_bar(frame, screen.status, app);

    // Modal overlays, errors first
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    } else if let Some(alert) = &app.state.alert {
        components::render_alert_dialog(frame, alert);
    }
}
