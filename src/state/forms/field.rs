//! Form field value objects and the per-field validity check

use regex::Regex;
use std::sync::LazyLock;

/// Shape of an email address: local part, `@`, one or more DNS labels
/// followed by a final label. Matched anywhere in the value, ignoring case.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?",
    )
    .expect("email pattern is a valid regex")
});

/// Rule set attached to a field. Unset rules are not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub is_email: bool,
    /// Helper text shown under the field when it fails validation
    pub error_message: Option<&'static str>,
}

impl ValidationRules {
    /// A non-blank value is required
    pub fn required(error_message: &'static str) -> Self {
        Self {
            required: true,
            is_email: false,
            error_message: Some(error_message),
        }
    }

    /// A non-blank, email-shaped value is required
    pub fn required_email(error_message: &'static str) -> Self {
        Self {
            required: true,
            is_email: true,
            error_message: Some(error_message),
        }
    }
}

/// Check `value` against every enforced rule.
///
/// Total over its input: a rule set with nothing enforced accepts anything.
/// The email check is a shape check only and is intentionally permissive.
pub fn validate(value: &str, rules: &ValidationRules) -> bool {
    let mut is_valid = true;

    if rules.required {
        is_valid = !value.trim().is_empty() && is_valid;
    }

    if rules.is_email {
        is_valid = EMAIL_PATTERN.is_match(value) && is_valid;
    }

    is_valid
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub rules: ValidationRules,
    pub valid: bool,
    /// Set once the user has edited or left the field
    pub touched: bool,
    /// Whether the last event on this field was a blur
    pub blurred: bool,
    pub is_multiline: bool,
    /// Hidden fields are kept in the model but never drawn or focused
    pub is_hidden: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, rules: ValidationRules, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            rules,
            valid: validate("", &rules),
            touched: false,
            blurred: false,
            is_multiline,
            is_hidden: false,
        }
    }

    /// Create a hidden field that carries no rules and starts out valid
    pub fn hidden(name: &str, label: &str) -> Self {
        Self {
            is_hidden: true,
            ..Self::text(name, label, ValidationRules::default(), false)
        }
    }

    /// Build the replacement for this field after an edit or blur event
    pub fn updated(&self, new_value: String, is_blur: bool) -> Self {
        Self {
            valid: validate(&new_value, &self.rules),
            value: new_value,
            touched: true,
            blurred: is_blur,
            ..self.clone()
        }
    }

    /// Empty value and default validity, rules and presentation kept
    pub fn cleared(&self) -> Self {
        Self {
            value: String::new(),
            valid: validate("", &self.rules),
            touched: false,
            blurred: false,
            ..self.clone()
        }
    }

    /// Whether the validation error should be surfaced to the user
    pub fn shows_error(&self) -> bool {
        !self.valid && self.touched && self.blurred
    }

    /// Helper text to display, if any
    pub fn error_text(&self) -> Option<&'static str> {
        if self.shows_error() {
            self.rules.error_message
        } else {
            None
        }
    }

    /// Value with the next character appended
    pub fn with_char(&self, c: char) -> String {
        let mut value = self.value.clone();
        value.push(c);
        value
    }

    /// Value with the last character removed
    pub fn without_last_char(&self) -> String {
        let mut value = self.value.clone();
        value.pop();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME_ERROR: &str = "Please, enter your name";

    fn name_field() -> FormField {
        FormField::text("name", "Your Name", ValidationRules::required(NAME_ERROR), false)
    }

    mod validate_fn {
        use super::*;

        #[test]
        fn test_no_rules_accepts_anything() {
            let rules = ValidationRules::default();
            assert!(validate("", &rules));
            assert!(validate("   ", &rules));
            assert!(validate("anything at all", &rules));
        }

        #[test]
        fn test_required_matches_trimmed_emptiness() {
            let rules = ValidationRules::required(NAME_ERROR);
            for value in ["", " ", "\t\n", "a", "  Ada  ", "\u{2003}x"] {
                assert_eq!(
                    validate(value, &rules),
                    !value.trim().is_empty(),
                    "{value:?}"
                );
            }
        }

        #[test]
        fn test_whitespace_only_fails_required() {
            let rules = ValidationRules::required(NAME_ERROR);
            assert!(!validate("    ", &rules));
        }

        #[test]
        fn test_known_good_address() {
            let rules = ValidationRules::required_email("Please, enter your email");
            assert!(validate("a@b.co", &rules));
            assert!(validate("first.last+tag@mail.example-site.org", &rules));
        }

        #[test]
        fn test_email_without_at_sign_fails() {
            let rules = ValidationRules {
                is_email: true,
                ..Default::default()
            };
            assert!(!validate("plainaddress", &rules));
            assert!(!validate("name.example.com", &rules));
        }

        #[test]
        fn test_email_without_domain_segment_fails() {
            let rules = ValidationRules {
                is_email: true,
                ..Default::default()
            };
            assert!(!validate("a@b", &rules));
            assert!(!validate("a@", &rules));
            assert!(!validate("a@.co", &rules));
            assert!(!validate("@b.co", &rules));
        }

        #[test]
        fn test_email_label_cannot_start_with_hyphen() {
            let rules = ValidationRules {
                is_email: true,
                ..Default::default()
            };
            assert!(!validate("a@-b.co", &rules));
        }

        #[test]
        fn test_email_ignores_case() {
            let rules = ValidationRules::required_email("Please, enter your email");
            assert!(validate("Ada.Lovelace@Example.COM", &rules));
        }

        #[test]
        fn test_email_only_whitespace_fails() {
            let rules = ValidationRules::required_email("Please, enter your email");
            assert!(!validate("   ", &rules));
        }
    }

    mod form_field {
        use super::*;

        #[test]
        fn test_text_field_starts_invalid_when_required() {
            let field = name_field();
            assert!(!field.valid);
            assert!(!field.touched);
            assert!(!field.blurred);
            assert!(!field.is_hidden);
        }

        #[test]
        fn test_hidden_field_is_valid() {
            let field = FormField::hidden("honeypot", "Leave empty");
            assert!(field.valid);
            assert!(field.is_hidden);
            assert_eq!(field.rules, ValidationRules::default());
        }

        #[test]
        fn test_updated_revalidates_and_marks_touched() {
            let field = name_field();
            let next = field.updated("Ada".to_string(), false);
            assert_eq!(next.value, "Ada");
            assert!(next.valid);
            assert!(next.touched);
            assert!(!next.blurred);
            // Source is untouched
            assert_eq!(field.value, "");
        }

        #[test]
        fn test_error_only_shown_after_blur() {
            let field = name_field();
            assert_eq!(field.error_text(), None);

            let typed = field.updated(" ".to_string(), false);
            assert!(!typed.valid);
            assert_eq!(typed.error_text(), None);

            let left = typed.updated(" ".to_string(), true);
            assert!(left.shows_error());
            assert_eq!(left.error_text(), Some(NAME_ERROR));
        }

        #[test]
        fn test_cleared_keeps_rules() {
            let rules = ValidationRules::required(NAME_ERROR);
            let field = FormField::text("name", "Your Name", rules, false)
                .updated("Ada".to_string(), true)
                .cleared();
            assert_eq!(field.value, "");
            assert!(!field.valid);
            assert!(!field.touched);
            assert_eq!(field.rules, rules);
        }

        #[test]
        fn test_char_helpers() {
            let field = name_field().updated("Ad".to_string(), false);
            assert_eq!(field.with_char('a'), "Ada");
            assert_eq!(field.without_last_char(), "A");
        }
    }
}
