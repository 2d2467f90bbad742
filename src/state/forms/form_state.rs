//! Contact form model

use super::field::{FormField, ValidationRules};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Names of the fields making up the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    Message,
    /// Bot trap: hidden from humans, so any content means an automated fill
    Honeypot,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Message,
        FieldName::Honeypot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
            Self::Honeypot => "honeypot",
        }
    }
}

/// Data handed to the send operation. The honeypot is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The whole form: an ordered mapping from field name to field.
///
/// Updates never mutate in place. Every change produces a new form with the
/// affected field replaced, and the caller swaps it in as the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: BTreeMap<FieldName, FormField>,
}

impl ContactForm {
    pub fn new() -> Self {
        let fields = FieldName::ALL
            .into_iter()
            .map(|name| (name, Self::initial_field(name)))
            .collect();
        Self { fields }
    }

    fn initial_field(name: FieldName) -> FormField {
        match name {
            FieldName::Name => FormField::text(
                name.as_str(),
                "Your Name",
                ValidationRules::required("Please, enter your name"),
                false,
            ),
            FieldName::Email => FormField::text(
                name.as_str(),
                "Your Email",
                ValidationRules::required_email("Please, enter your email"),
                false,
            ),
            FieldName::Message => FormField::text(
                name.as_str(),
                "Your Message",
                ValidationRules::required("Please, enter your message"),
                true,
            ),
            FieldName::Honeypot => FormField::hidden(
                name.as_str(),
                "If you are a human, do not type anything here. I am here to fool bots",
            ),
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        // Every FieldName is inserted by `new` and never removed
        &self.fields[&name]
    }

    /// Fields in display order, hidden ones included
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FormField)> {
        self.fields.iter().map(|(name, field)| (*name, field))
    }

    /// Fields a human can see and focus
    pub fn visible_fields(&self) -> impl Iterator<Item = (FieldName, &FormField)> {
        self.iter().filter(|(_, field)| !field.is_hidden)
    }

    /// Return a new form with `name` replaced after an edit or blur event
    pub fn update_field(&self, name: FieldName, new_value: String, is_blur: bool) -> Self {
        let mut fields = self.fields.clone();
        let updated = self.field(name).updated(new_value, is_blur);
        fields.insert(name, updated);
        Self { fields }
    }

    /// True only when every field, honeypot included, is valid
    pub fn is_form_valid(&self) -> bool {
        self.fields.values().all(|field| field.valid)
    }

    /// Empty every field and restore default validity, keeping the rules
    pub fn reset(&self) -> Self {
        let fields = self
            .fields
            .iter()
            .map(|(name, field)| (*name, field.cleared()))
            .collect();
        Self { fields }
    }

    /// Anything in the honeypot means the form was filled by a bot
    pub fn is_bot_submission(&self) -> bool {
        !self.field(FieldName::Honeypot).value.is_empty()
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.field(FieldName::Name).value.clone(),
            email: self.field(FieldName::Email).value.clone(),
            message: self.field(FieldName::Message).value.clone(),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm::new()
            .update_field(FieldName::Name, "Ada".to_string(), true)
            .update_field(FieldName::Email, "ada@example.com".to_string(), true)
            .update_field(FieldName::Message, "Hello there".to_string(), true)
    }

    mod construction {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_fields_in_order() {
            let form = ContactForm::new();
            let names: Vec<FieldName> = form.iter().map(|(name, _)| name).collect();
            assert_eq!(names, FieldName::ALL.to_vec());
        }

        #[test]
        fn test_new_visible_fields_invalid_honeypot_valid() {
            let form = ContactForm::new();
            assert!(!form.field(FieldName::Name).valid);
            assert!(!form.field(FieldName::Email).valid);
            assert!(!form.field(FieldName::Message).valid);
            assert!(form.field(FieldName::Honeypot).valid);
            assert!(form.iter().all(|(_, f)| f.value.is_empty() && !f.touched));
        }

        #[test]
        fn test_visible_fields_skips_honeypot() {
            let form = ContactForm::new();
            let names: Vec<FieldName> = form.visible_fields().map(|(name, _)| name).collect();
            assert_eq!(names, vec![FieldName::Name, FieldName::Email, FieldName::Message]);
        }

        #[test]
        fn test_message_is_multiline() {
            let form = ContactForm::new();
            assert!(form.field(FieldName::Message).is_multiline);
            assert!(!form.field(FieldName::Name).is_multiline);
        }

        #[test]
        fn test_default_equals_new() {
            assert_eq!(ContactForm::default(), ContactForm::new());
        }
    }

    mod update_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_replaces_only_target_field() {
            let form = ContactForm::new();
            let next = form.update_field(FieldName::Name, "Ada".to_string(), false);

            assert_eq!(next.field(FieldName::Name).value, "Ada");
            assert!(next.field(FieldName::Name).valid);
            assert!(next.field(FieldName::Name).touched);
            assert_eq!(next.field(FieldName::Email), form.field(FieldName::Email));
            assert_eq!(next.field(FieldName::Message), form.field(FieldName::Message));
            // Source form is left as it was
            assert_eq!(form, ContactForm::new());
        }

        #[test]
        fn test_bad_email_then_blur_is_invalid_and_touched() {
            let form = ContactForm::new()
                .update_field(FieldName::Email, "not-an-email".to_string(), false)
                .update_field(FieldName::Email, "not-an-email".to_string(), true);
            let email = form.field(FieldName::Email);

            assert!(!email.valid);
            assert!(email.touched);
            assert!(email.blurred);
            assert_eq!(email.error_text(), Some("Please, enter your email"));
            assert!(!form.is_form_valid());
        }

        #[test]
        fn test_honeypot_stays_valid_with_content() {
            let form = ContactForm::new().update_field(FieldName::Honeypot, "spam".to_string(), false);
            assert!(form.field(FieldName::Honeypot).valid);
        }
    }

    mod validity {
        use super::*;

        #[test]
        fn test_invalid_while_any_visible_field_empty() {
            let form = ContactForm::new()
                .update_field(FieldName::Name, "Ada".to_string(), false)
                .update_field(FieldName::Email, "ada@example.com".to_string(), false);
            assert!(!form.is_form_valid());
        }

        #[test]
        fn test_valid_once_all_visible_fields_valid() {
            assert!(filled_form().is_form_valid());
        }

        #[test]
        fn test_validity_independent_of_honeypot() {
            let form = filled_form().update_field(FieldName::Honeypot, "bot".to_string(), false);
            assert!(form.is_form_valid());
        }

        #[test]
        fn test_clearing_a_field_invalidates_form() {
            let form = filled_form().update_field(FieldName::Message, String::new(), false);
            assert!(!form.is_form_valid());
        }
    }

    mod reset_and_payload {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_restores_defaults_and_rules() {
            let form = filled_form().reset();
            assert_eq!(form, ContactForm::new());
        }

        #[test]
        fn test_payload_excludes_honeypot() {
            let form = filled_form();
            assert_eq!(
                form.payload(),
                ContactPayload {
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                    message: "Hello there".to_string(),
                }
            );
            let json = serde_json::to_value(form.payload()).unwrap();
            assert!(json.get("honeypot").is_none());
        }

        #[test]
        fn test_bot_submission_detection() {
            assert!(!filled_form().is_bot_submission());
            let form = filled_form().update_field(FieldName::Honeypot, "x".to_string(), false);
            assert!(form.is_bot_submission());
        }
    }
}
