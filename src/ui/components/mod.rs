//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::render_notification;
