//! Layout components (content column, status bar)

use crate::app::App;
use crate::state::SubmissionPhase;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form column grows on large terminals
const MAX_CONTENT_WIDTH: u16 = 72;

/// Split the screen into a centered content column and a status bar row
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let [content] = Layout::horizontal([Constraint::Max(MAX_CONTENT_WIDTH)])
        .flex(Flex::Center)
        .areas(rows[0]);

    (content, rows[1])
}

/// Status bar label and color for the current submission phase
fn phase_indicator(phase: SubmissionPhase) -> (&'static str, Color) {
    match phase {
        SubmissionPhase::Idle => (" ● ready ", Color::Green),
        SubmissionPhase::Submitting => (" ◌ sending ", Color::Yellow),
        SubmissionPhase::Succeeded => (" ✓ sent ", Color::Green),
        SubmissionPhase::Failed => (" ✗ failed ", Color::Red),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (label, color) = phase_indicator(app.state.submission.phase());

    let mut spans = vec![Span::styled(label, Style::default().fg(color))];

    let hint = if app.state.submission.notification_visible {
        "Enter/Esc:dismiss"
    } else if app.state.form.is_form_valid() {
        "Ready to send"
    } else {
        "Fill in every field to enable Send"
    };
    spans.push(Span::styled(hint, Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
