//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_contact_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Notification overlays the form while shown
    let submission = &app.state.submission;
    if let Some(message) = submission.notification_message() {
        components::render_notification(frame, message, submission.error);
    }
}
