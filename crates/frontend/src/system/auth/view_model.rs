use leptos::prelude::*;
use std::cell::Cell;

use super::credential_gate::{CredentialForm, SubmitOutcome};
use crate::routes::navigation::{Destination, Navigator};

/// ViewModel for the login form
#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: RwSignal<CredentialForm>,
}

impl LoginViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CredentialForm::new()),
        }
    }

    pub fn identifier(&self) -> String {
        self.form.with(|f| f.identifier().to_string())
    }

    pub fn secret(&self) -> String {
        self.form.with(|f| f.secret().to_string())
    }

    pub fn identifier_error(&self) -> Option<String> {
        self.form.with(|f| f.identifier_error().map(str::to_string))
    }

    pub fn secret_error(&self) -> Option<String> {
        self.form.with(|f| f.secret_error().map(str::to_string))
    }

    pub fn can_submit(&self) -> bool {
        self.form.with(|f| f.can_submit())
    }

    pub fn set_identifier(&self, value: String) {
        self.form.update(|f| f.set_identifier(value));
    }

    pub fn set_secret(&self, value: String) {
        self.form.update(|f| f.set_secret(value));
    }

    pub fn blur_identifier(&self) {
        self.form.update(|f| f.blur_identifier());
    }

    pub fn blur_secret(&self) {
        self.form.update(|f| f.blur_secret());
    }

    pub fn submit(&self, navigator: &impl Navigator) -> SubmitOutcome {
        // Commit the touched flags before navigating; navigation disposes this view.
        let requested = Cell::new(None);
        let mut form = self.form.get_untracked();
        let outcome = form.submit(&|d: Destination| requested.set(Some(d)));
        self.form.set(form);

        if let Some(destination) = requested.get() {
            navigator.navigate(destination);
        }
        outcome
    }
}

impl Default for LoginViewModel {
    fn default() -> Self {
        Self::new()
    }
}
