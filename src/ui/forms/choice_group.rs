//! Radio and checkbox group rendering

use crate::state::forms::ChoiceOption;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::collections::BTreeSet;

fn option_style(is_highlighted: bool, is_selected: bool) -> Style {
    let style = if is_selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    if is_highlighted {
        style.fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style
    }
}

/// Draw a radio group on one line.
///
/// `cursor` is the highlighted option when the group has focus.
pub fn draw_radio_group<T: ChoiceOption>(
    frame: &mut Frame,
    area: Rect,
    selected: Option<T>,
    cursor: Option<usize>,
) {
    let mut spans = Vec::new();
    for (idx, option) in T::ALL.iter().enumerate() {
        let is_selected = selected == Some(*option);
        let marker = if is_selected { "(•)" } else { "( )" };
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("{marker} {}", option.label()),
            option_style(cursor == Some(idx), is_selected),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw a checkbox group, one option per line
pub fn draw_checkbox_group<T: ChoiceOption>(
    frame: &mut Frame,
    area: Rect,
    selected: &BTreeSet<T>,
    cursor: Option<usize>,
) {
    let lines: Vec<Line> = T::ALL
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let is_selected = selected.contains(option);
            let marker = if is_selected { "[x]" } else { "[ ]" };
            Line::from(Span::styled(
                format!("{marker} {}", option.label()),
                option_style(cursor == Some(idx), is_selected),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
