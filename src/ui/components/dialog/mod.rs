//! Dialog components for TUI

mod base;
mod notification_dialog;

pub use notification_dialog::render_notification;
