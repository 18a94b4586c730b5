//! Contact form dialog component.
//!
//! The browser keeps no form state between requests, so each round trip
//! carries the field values plus a "touched" flag per field. Only touched
//! fields are re-validated while typing; an untouched field still holds the
//! value the dialog opened with and shows no error.

use contact_list_core::{Contact, ContactForm, FormMode};
use serde::Deserialize;

use crate::shell::FormState;

/// Form body posted by the dialog, both on keystrokes and on submit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Field whose keystroke triggered validation (`name` or `email`).
    #[serde(default)]
    pub changed: Option<String>,
    #[serde(default)]
    pub name_touched: Option<String>,
    #[serde(default)]
    pub email_touched: Option<String>,
}

impl ContactFormInput {
    fn touched(&self, field: &str, flag: Option<&String>) -> bool {
        self.changed.as_deref() == Some(field) || flag.is_some_and(|v| v == "true")
    }

    #[must_use]
    pub fn name_touched(&self) -> bool {
        self.touched("name", self.name_touched.as_ref())
    }

    #[must_use]
    pub fn email_touched(&self) -> bool {
        self.touched("email", self.email_touched.as_ref())
    }

    /// Rebuild the form for `state` and replay the touched fields through the
    /// per-keystroke rules.
    #[must_use]
    pub fn replay(&self, state: &FormState, existing: &[Contact]) -> ContactForm {
        let mut form = ContactForm::open(state.mode, state.selected.as_ref());
        if self.name_touched() {
            form.set_name(self.name.clone());
        }
        if self.email_touched() {
            form.set_email(self.email.clone(), existing);
        }
        form
    }

    /// Rebuild the form with both fields as typed, ready for submit.
    #[must_use]
    pub fn fill(&self, state: &FormState, existing: &[Contact]) -> ContactForm {
        let mut form = ContactForm::open(state.mode, state.selected.as_ref());
        form.set_name(self.name.clone());
        form.set_email(self.email.clone(), existing);
        form
    }
}

/// Template data for the dialog and its fields fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub name: String,
    pub email: String,
    pub name_error: Option<&'static str>,
    pub email_error: Option<&'static str>,
    pub name_touched: bool,
    pub email_touched: bool,
}

impl FormView {
    /// View of a form, with explicit touched flags.
    #[must_use]
    pub fn new(form: &ContactForm, name_touched: bool, email_touched: bool) -> Self {
        let errors = form.errors();
        Self {
            title: match form.mode() {
                FormMode::Add => "Add Contact",
                FormMode::Edit => "Edit Contact",
            },
            submit_label: form.mode().submit_label(),
            name: form.name().to_owned(),
            email: form.email().to_owned(),
            name_error: errors.name_message(),
            email_error: errors.email_message(),
            name_touched,
            email_touched,
        }
    }

    /// View of a freshly opened dialog.
    #[must_use]
    pub fn opened(state: &FormState) -> Self {
        Self::new(
            &ContactForm::open(state.mode, state.selected.as_ref()),
            false,
            false,
        )
    }
}
