//! Local credential gate for the login screen.
//!
//! There is no authentication behind it: a submit attempt either stays on the
//! form (showing validation messages) or navigates to the catalog.

use crate::config::MIN_SECRET_LEN;
use crate::routes::navigation::{Destination, Navigator};

pub const IDENTIFIER_REQUIRED: &str = "Enter your username or e-mail.";
pub const SECRET_INVALID: &str = "Invalid password.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; both fields are now touched
    Blocked,
    /// Navigation to the catalog was requested
    Navigated,
}

/// Raw field values and touched flags. Everything else is derived on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialForm {
    identifier: String,
    secret: String,
    identifier_touched: bool,
    secret_touched: bool,
}

impl CredentialForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn identifier_touched(&self) -> bool {
        self.identifier_touched
    }

    pub fn secret_touched(&self) -> bool {
        self.secret_touched
    }

    pub fn set_identifier(&mut self, value: impl Into<String>) {
        self.identifier = value.into();
    }

    pub fn set_secret(&mut self, value: impl Into<String>) {
        self.secret = value.into();
    }

    pub fn blur_identifier(&mut self) {
        self.identifier_touched = true;
    }

    pub fn blur_secret(&mut self) {
        self.secret_touched = true;
    }

    pub fn identifier_error(&self) -> Option<&'static str> {
        (self.identifier_touched && !identifier_is_valid(&self.identifier))
            .then_some(IDENTIFIER_REQUIRED)
    }

    pub fn secret_error(&self) -> Option<&'static str> {
        (self.secret_touched && !secret_is_valid(&self.secret)).then_some(SECRET_INVALID)
    }

    pub fn can_submit(&self) -> bool {
        can_submit(&self.identifier, &self.secret)
    }

    /// Marks both fields touched, then navigates to the catalog if the form
    /// is valid. Credentials are neither stored nor sent anywhere.
    pub fn submit(&mut self, navigator: &impl Navigator) -> SubmitOutcome {
        self.identifier_touched = true;
        self.secret_touched = true;

        if !self.can_submit() {
            log::debug!("credential gate: submit blocked by validation");
            return SubmitOutcome::Blocked;
        }

        log::info!("credential gate: submit accepted");
        navigator.navigate(Destination::Catalog);
        SubmitOutcome::Navigated
    }
}

fn identifier_is_valid(identifier: &str) -> bool {
    !identifier.trim().is_empty()
}

fn secret_is_valid(secret: &str) -> bool {
    secret.trim().chars().count() >= MIN_SECRET_LEN
}

pub fn can_submit(identifier: &str, secret: &str) -> bool {
    identifier_is_valid(identifier) && secret_is_valid(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<Destination>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, destination: Destination) {
            self.visited.borrow_mut().push(destination);
        }
    }

    fn filled(identifier: &str, secret: &str) -> CredentialForm {
        let mut form = CredentialForm::new();
        form.set_identifier(identifier);
        form.set_secret(secret);
        form
    }

    #[test]
    fn test_can_submit_matches_trimmed_lengths() {
        let cases = [
            ("", "", false),
            ("a", "12345", false),
            ("a", "123456", true),
            ("   ", "123456", false),
            ("a", "  12345  ", false),
            ("  a  ", " 123456 ", true),
            ("user@example.com", "a very long passphrase", true),
            ("\tuser\n", "\t\n", false),
            ("ü", "ääääää", true),
        ];
        for (identifier, secret, expected) in cases {
            assert_eq!(
                can_submit(identifier, secret),
                expected,
                "identifier={:?} secret={:?}",
                identifier,
                secret
            );
            assert_eq!(filled(identifier, secret).can_submit(), expected);
        }
    }

    #[test]
    fn test_no_errors_before_fields_are_touched() {
        let form = filled("", "");

        assert_eq!(form.identifier_error(), None);
        assert_eq!(form.secret_error(), None);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_editing_does_not_touch_fields() {
        let mut form = CredentialForm::new();
        form.set_identifier("x");
        form.set_secret("y");

        assert!(!form.identifier_touched());
        assert!(!form.secret_touched());
    }

    #[test]
    fn test_blur_shows_only_that_field_error() {
        let mut form = filled("", "");
        form.blur_identifier();

        assert_eq!(form.identifier_error(), Some(IDENTIFIER_REQUIRED));
        assert_eq!(form.secret_error(), None);

        form.blur_secret();
        form.blur_secret();
        assert!(form.secret_touched());
        assert_eq!(form.secret_error(), Some(SECRET_INVALID));
    }

    #[test]
    fn test_error_clears_when_value_becomes_valid() {
        let mut form = filled("", "123");
        form.blur_identifier();
        form.blur_secret();

        form.set_identifier("john");
        form.set_secret("123456");

        assert_eq!(form.identifier_error(), None);
        assert_eq!(form.secret_error(), None);
    }

    #[test]
    fn test_submit_on_empty_form_blocks_and_marks_touched() {
        let navigator = RecordingNavigator::default();
        let mut form = CredentialForm::new();

        let outcome = form.submit(&navigator);

        assert_eq!(outcome, SubmitOutcome::Blocked);
        assert!(form.identifier_touched());
        assert!(form.secret_touched());
        assert_eq!(form.identifier_error(), Some(IDENTIFIER_REQUIRED));
        assert_eq!(form.secret_error(), Some(SECRET_INVALID));
        assert!(navigator.visited.borrow().is_empty());
    }

    #[test]
    fn test_submit_valid_form_navigates_to_catalog() {
        let navigator = RecordingNavigator::default();
        let mut form = filled("a", "123456");

        let outcome = form.submit(&navigator);

        assert_eq!(outcome, SubmitOutcome::Navigated);
        assert_eq!(*navigator.visited.borrow(), vec![Destination::Catalog]);
        assert_eq!(form.identifier_error(), None);
        assert_eq!(form.secret_error(), None);
    }

    #[test]
    fn test_submit_leaves_raw_values_untrimmed() {
        let navigator = RecordingNavigator::default();
        let mut form = filled("  a  ", " 123456 ");

        form.submit(&navigator);

        assert_eq!(form.identifier(), "  a  ");
        assert_eq!(form.secret(), " 123456 ");
    }

    #[test]
    fn test_blocked_submit_only_changes_touched_flags() {
        let navigator = RecordingNavigator::default();
        let mut form = filled("a", "12345");
        let mut expected = form.clone();
        expected.blur_identifier();
        expected.blur_secret();

        form.submit(&navigator);

        assert_eq!(form, expected);
        assert!(navigator.visited.borrow().is_empty());
    }
}
