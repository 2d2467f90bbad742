//! Application state definitions

use super::forms::{ContactForm, FieldName};
use super::submission::SubmissionState;

/// What currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    SendButton,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldName::Name)
    }
}

/// Complete state of one contact form's lifecycle
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: ContactForm,
    pub submission: SubmissionState,
    pub focus: Focus,
}

impl AppState {
    /// Focus stops in display order, hidden fields excluded, send button last
    fn focus_order(&self) -> Vec<Focus> {
        self.form
            .visible_fields()
            .map(|(name, _)| Focus::Field(name))
            .chain(std::iter::once(Focus::SendButton))
            .collect()
    }

    fn move_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let count = order.len();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else if current == 0 {
            count - 1
        } else {
            current - 1
        };
        self.set_focus(order[next]);
    }

    /// Move to the next focus stop
    pub fn next_focus(&mut self) {
        self.move_focus(true);
    }

    /// Move to the previous focus stop
    pub fn prev_focus(&mut self) {
        self.move_focus(false);
    }

    /// Change focus, blurring the field that loses it
    pub fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }
        if let Focus::Field(name) = self.focus {
            self.blur_field(name);
        }
        self.focus = focus;
    }

    /// Focused field, if focus is on a field
    pub fn focused_field(&self) -> Option<FieldName> {
        match self.focus {
            Focus::Field(name) => Some(name),
            Focus::SendButton => None,
        }
    }

    pub fn is_focused_field_multiline(&self) -> bool {
        self.focused_field()
            .is_some_and(|name| self.form.field(name).is_multiline)
    }

    /// Record a value edit on `name`
    pub fn edit_field(&mut self, name: FieldName, value: String) {
        self.form = self.form.update_field(name, value, false);
    }

    /// Record that `name` lost focus
    pub fn blur_field(&mut self, name: FieldName) {
        let value = self.form.field(name).value.clone();
        self.form = self.form.update_field(name, value, true);
    }

    /// Handle character input in the focused field
    pub fn form_input_char(&mut self, c: char) {
        if let Some(name) = self.focused_field() {
            let value = self.form.field(name).with_char(c);
            self.edit_field(name, value);
        }
    }

    /// Handle backspace in the focused field
    pub fn form_backspace(&mut self) {
        if let Some(name) = self.focused_field() {
            let value = self.form.field(name).without_last_char();
            self.edit_field(name, value);
        }
    }

    /// Whether the send action is available right now
    pub fn can_submit(&self) -> bool {
        self.form.is_form_valid() && !self.submission.is_loading
    }
}
