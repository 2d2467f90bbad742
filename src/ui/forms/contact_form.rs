//! Contact form view

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::platform::{QUIT_SHORTCUT, SEND_SHORTCUT};
use crate::state::{FieldName, Focus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_MS: u128 = 80;

/// Spinner glyph for a send that has been running for `elapsed`
fn spinner_frame(elapsed: Duration) -> &'static str {
    let idx = (elapsed.as_millis() / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[idx]
}

/// Row height for a field
fn field_height(name: FieldName) -> Constraint {
    match name {
        FieldName::Message => Constraint::Min(6),
        _ => Constraint::Length(3),
    }
}

/// Draw the contact form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;

    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let visible: Vec<_> = state.form.visible_fields().collect();

    let mut constraints = vec![Constraint::Length(3)]; // Heading
    constraints.extend(visible.iter().map(|(name, _)| field_height(*name)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Send / spinner
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Send us a message",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "We'll get back to you soon.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    for (idx, (name, field)) in visible.iter().enumerate() {
        let is_active = state.focus == Focus::Field(*name);
        draw_field(frame, chunks[idx + 1], field, is_active);
    }

    let action_area = centered_button_area(chunks[visible.len() + 1], 16);
    match app.send_elapsed() {
        Some(elapsed) => {
            let spinner = Paragraph::new(format!("{} Sending...", spinner_frame(elapsed)))
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                );
            frame.render_widget(spinner, action_area);
        }
        None => render_button(
            frame,
            action_area,
            "Send",
            state.focus == Focus::SendButton,
            state.can_submit(),
        ),
    }

    draw_help_text(
        frame,
        chunks[visible.len() + 2],
        &[
            ("Tab/Shift+Tab", "move"),
            (SEND_SHORTCUT, "send"),
            (QUIT_SHORTCUT, "quit"),
        ],
    );
}

/// Horizontally center a button of `width` inside `area`
fn centered_button_area(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
