//! Phone form rendering

use super::choice_group::{draw_checkbox_group, draw_radio_group};
use super::field_renderer::{
    border_color, draw_alert, draw_text_field, TextFieldProps, TEXT_FIELD_HEIGHT,
};
use crate::state::forms::{
    phone::PHONE_PLACEHOLDER, ChoiceOption, Destination, FieldId, Focus, PhoneForm, Scenario,
    Vehicle,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed by an alert line, which is only reserved while an error shows
fn alert_rows(form: &PhoneForm, field: FieldId) -> u16 {
    u16::from(form.error(field).is_some())
}

/// Rows needed by a scenario's dependent checkbox group
fn dependent_height(form: &PhoneForm, scenario: Scenario) -> u16 {
    let field = scenario.dependent_field();
    if !form.is_visible(field) {
        return 0;
    }
    let options = match scenario {
        Scenario::One => Vehicle::ALL.len(),
        Scenario::Two => Destination::ALL.len(),
    } as u16;
    2 + options + alert_rows(form, field)
}

/// Rows needed by a scenario: heading, fieldset borders, radios, alert, group
fn scenario_height(form: &PhoneForm, scenario: Scenario) -> u16 {
    1 + 2 + 1 + alert_rows(form, scenario.choice_field()) + dependent_height(form, scenario)
}

/// Draw the whole form
pub fn draw_phone_form(frame: &mut Frame, area: Rect, form: &PhoneForm) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TEXT_FIELD_HEIGHT),                   // Phone
            Constraint::Length(TEXT_FIELD_HEIGHT),                   // Confirm phone
            Constraint::Length(scenario_height(form, Scenario::One)), // Scenario 1
            Constraint::Length(scenario_height(form, Scenario::Two)), // Scenario 2
            Constraint::Length(BUTTON_HEIGHT),                       // Submit
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    let focus = form.focus();

    for (field, chunk) in [(FieldId::Phone, chunks[0]), (FieldId::ConfirmPhone, chunks[1])] {
        let value = match field {
            FieldId::Phone => &form.values().phone,
            _ => &form.values().confirm_phone,
        };
        draw_text_field(
            frame,
            chunk,
            TextFieldProps {
                label: field.label(),
                value,
                placeholder: PHONE_PLACEHOLDER,
                is_active: focus == Focus::Field(field),
                attrs: form.accessibility(field),
                error: form.error(field),
            },
        );
    }

    for (scenario, chunk) in Scenario::ALL.into_iter().zip([chunks[2], chunks[3]]) {
        draw_scenario(frame, chunk, form, scenario);
    }

    let button_area = Rect {
        width: chunks[4].width.min(14),
        ..chunks[4]
    };
    render_button(frame, button_area, "Submit", focus == Focus::Submit, Color::Green);
}

/// Draw a scenario fieldset: heading, radio group and dependent group
fn draw_scenario(frame: &mut Frame, area: Rect, form: &PhoneForm, scenario: Scenario) {
    let choice = scenario.choice_field();
    let dependent = scenario.dependent_field();
    let focus = form.focus();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        Paragraph::new(scenario.heading()).style(Style::default().fg(Color::DarkGray)),
        rows[0],
    );

    // Fieldset border reflects the radio group, or the dependent group while it has focus
    let fieldset_active = focus == Focus::Field(choice) || focus == Focus::Field(dependent);
    let fieldset = Block::default()
        .title(format!(" {} ", choice.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(
            fieldset_active,
            &form.accessibility(choice),
        )));
    let inner = fieldset.inner(rows[1]);
    frame.render_widget(fieldset, rows[1]);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(alert_rows(form, choice)),
            Constraint::Length(dependent_height(form, scenario)),
        ])
        .split(inner);

    let radio_cursor = (focus == Focus::Field(choice)).then(|| form.option_cursor(choice));
    draw_radio_group(frame, parts[0], form.values().answer(scenario), radio_cursor);
    draw_alert(frame, parts[1], &form.accessibility(choice), form.error(choice));

    if form.is_visible(dependent) {
        draw_dependent_group(frame, parts[2], form, scenario);
    }
}

fn draw_dependent_group(frame: &mut Frame, area: Rect, form: &PhoneForm, scenario: Scenario) {
    let field = scenario.dependent_field();
    let is_active = form.focus() == Focus::Field(field);
    let cursor = is_active.then(|| form.option_cursor(field));

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_active, &form.accessibility(field))));
    // Only the vehicle group carries a legend
    if scenario == Scenario::One {
        block = block.title(format!(" {} ", field.label()));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(alert_rows(form, field))])
        .split(inner);

    match scenario {
        Scenario::One => draw_checkbox_group(frame, parts[0], &form.values().vehicle, cursor),
        Scenario::Two => draw_checkbox_group(frame, parts[0], &form.values().destination, cursor),
    }
    draw_alert(frame, parts[1], &form.accessibility(field), form.error(field));
}
