//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Border color for a field: errors win over focus
fn border_color(field: &FormField, is_active: bool) -> Color {
    if field.shows_error() {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Draw a form field, with its validation message under the border when
/// the field should surface an error
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value.as_str(), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let label = if field.rules.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let mut block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(field, is_active)));

    if let Some(error) = field.error_text() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the help text line at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (idx, (keys, action)) in entries.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*keys, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(": {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
