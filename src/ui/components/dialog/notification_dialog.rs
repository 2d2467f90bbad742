//! Submission result notification

use super::base::{render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render the notification for the last submission near the top of the screen.
///
/// Errors carry a dismiss hint since they stay until dismissed; the success
/// notice goes away on its own.
pub fn render_notification(frame: &mut Frame, message: &str, is_error: bool) {
    let (title, accent) = if is_error {
        ("Error", Color::Red)
    } else {
        ("Sent", Color::Green)
    };

    render_dialog(
        frame,
        DialogConfig {
            title,
            accent,
            message,
            hint: is_error.then_some("Press Enter or Esc to dismiss"),
            max_width: 60,
        },
    );
}
