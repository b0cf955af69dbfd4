//! Field rendering utilities for forms

use crate::state::forms::{AccessibilityAttrs, FieldError};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a text input: bordered box plus alert line
pub const TEXT_FIELD_HEIGHT: u16 = 4;

/// Border color for a control given focus and validity
pub fn border_color(is_active: bool, attrs: &AccessibilityAttrs) -> Color {
    if attrs.invalid {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Text input properties
pub struct TextFieldProps<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub is_active: bool,
    pub attrs: AccessibilityAttrs,
    pub error: Option<&'a FieldError>,
}

/// Draw a single-line text input with its alert region below
pub fn draw_text_field(frame: &mut Frame, area: Rect, props: TextFieldProps) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = Style::default().fg(border_color(props.is_active, &props.attrs));

    let mut spans = Vec::new();
    if props.value.is_empty() {
        spans.push(Span::styled(
            props.placeholder,
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        let style = if props.is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        spans.push(Span::styled(props.value, style));
    }
    if props.is_active {
        // Cursor sits after the value, in front of any placeholder
        let at = if props.value.is_empty() { 0 } else { spans.len() };
        spans.insert(at, Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {} ", props.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);
    draw_alert(frame, chunks[1], &props.attrs, props.error);
}

/// Draw the alert region for a field's error, if any.
///
/// The region is tagged with the id the field's `described_by` points at.
pub fn draw_alert(
    frame: &mut Frame,
    area: Rect,
    attrs: &AccessibilityAttrs,
    error: Option<&FieldError>,
) {
    let Some(err) = error else {
        return;
    };
    let mut spans = vec![Span::styled(
        format!("⚠ {err}"),
        Style::default().fg(Color::Red),
    )];
    if let Some(id) = &attrs.described_by {
        spans.push(Span::styled(
            format!("  #{id}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
