//! Form-state inspector panel

use crate::state::forms::{FieldId, PhoneForm};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

fn flag(value: bool) -> &'static str {
    if value {
        "✓"
    } else {
        "·"
    }
}

/// Draw a table of every field's value, flags and error
pub fn draw(frame: &mut Frame, area: Rect, form: &PhoneForm) {
    let header = Row::new(["Field", "Value", "D", "T", "Invalid", "Error"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = FieldId::ALL
        .iter()
        .map(|field| {
            let meta = form.meta(*field);
            let attrs = form.accessibility(*field);
            let error = form
                .error(*field)
                .map(|e| e.to_string())
                .unwrap_or_default();
            let name_style = if form.is_visible(*field) {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Row::new([
                Cell::from(field.name()).style(name_style),
                Cell::from(form.values().display_value(*field)),
                Cell::from(flag(meta.dirty)),
                Cell::from(flag(meta.touched)),
                Cell::from(attrs.aria_invalid()),
                Cell::from(error).style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(15),
            Constraint::Length(24),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(7),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" DevTool ")
            .title_bottom(Line::from(format!(
                " submits: {} | valid: {} ",
                form.submit_count(),
                !form.has_errors()
            )))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    frame.render_widget(table, area);
}
