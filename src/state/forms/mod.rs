//! Form domain layer
//!
//! Field values, their validation rules, and the contact form that owns them.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{ContactForm, ContactPayload, FieldName};
