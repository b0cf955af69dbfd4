//! Layout components (header, form area, inspector, status bar)

use crate::app::App;
use crate::platform::{DEVTOOLS_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub devtools: Option<Rect>,
    pub status: Rect,
}

/// Split the screen, reserving a right-hand column for the inspector if shown
pub fn create_layout(area: Rect, show_devtools: bool) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let (form, devtools) = if show_devtools {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(50), Constraint::Percentage(45)])
            .split(rows[1]);
        (columns[0], Some(columns[1]))
    } else {
        (rows[1], None)
    };

    ScreenLayout {
        header: rows[0],
        form,
        devtools,
        status: rows[2],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        " Form",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);
}

/// Draw the status region, or key help when there is no status
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.state.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        None => {
            let key = Style::default().fg(Color::Cyan);
            let text = Style::default().fg(Color::DarkGray);
            Line::from(vec![
                Span::styled(" Tab", key),
                Span::styled(" next  ", text),
                Span::styled("Space", key),
                Span::styled(" select  ", text),
                Span::styled(SUBMIT_SHORTCUT, key),
                Span::styled(" submit  ", text),
                Span::styled(DEVTOOLS_SHORTCUT, key),
                Span::styled(" inspector  ", text),
                Span::styled("Esc", key),
                Span::styled(" quit", text),
            ])
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
