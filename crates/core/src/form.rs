//! Add/edit contact form.
//!
//! The form validates on every field change and again on submit. A submit
//! only yields a contact when the name, the email pattern and the email
//! uniqueness checks all pass at once; otherwise the form stays open with
//! its error flags set.
//!
//! Uniqueness is checked against the collection the caller passes in,
//! skipping the contact being edited, so resubmitting an unchanged email
//! while editing is accepted.

use serde::{Deserialize, Serialize};

use crate::types::{Contact, ContactId, is_valid_email};

/// Helper text shown under an empty name.
pub const NAME_REQUIRED: &str = "Name is required";

/// Helper text shown when another contact already uses the email.
pub const EMAIL_EXISTS: &str = "Email already exists";

/// Helper text shown when the email does not match the pattern.
pub const EMAIL_INVALID: &str = "Please enter a valid email";

/// Whether the form creates a new contact or edits an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    #[default]
    Add,
    Edit,
}

impl FormMode {
    /// Label of the submit button.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Add => "Add New Contact",
            Self::Edit => "Save Update",
        }
    }
}

/// Error flags of the form, all cleared when it opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub name: bool,
    pub email_invalid: bool,
    pub email_exists: bool,
}

impl FieldErrors {
    /// True when no check failed.
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        !self.name && !self.email_invalid && !self.email_exists
    }

    /// Helper text for the name field, if any.
    #[must_use]
    pub const fn name_message(&self) -> Option<&'static str> {
        if self.name { Some(NAME_REQUIRED) } else { None }
    }

    /// Helper text for the email field, if any. "Already exists" wins over
    /// "invalid" when both are set.
    #[must_use]
    pub const fn email_message(&self) -> Option<&'static str> {
        if self.email_exists {
            Some(EMAIL_EXISTS)
        } else if self.email_invalid {
            Some(EMAIL_INVALID)
        } else {
            None
        }
    }

    /// Whether the email field should be highlighted.
    #[must_use]
    pub const fn email(&self) -> bool {
        self.email_invalid || self.email_exists
    }
}

/// Contact form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    mode: FormMode,
    editing_id: Option<ContactId>,
    name: String,
    email: String,
    errors: FieldErrors,
}

impl ContactForm {
    /// Open the form.
    ///
    /// In edit mode the fields are pre-filled from `contact`; in add mode, or
    /// when no contact is supplied, they start empty.
    #[must_use]
    pub fn open(mode: FormMode, contact: Option<&Contact>) -> Self {
        let prefill = match mode {
            FormMode::Edit => contact,
            FormMode::Add => None,
        };

        Self {
            mode,
            editing_id: contact.and_then(|c| c.id),
            name: prefill.map(|c| c.name().to_owned()).unwrap_or_default(),
            email: prefill.map(|c| c.email().to_owned()).unwrap_or_default(),
            errors: FieldErrors::default(),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// The id carried over to the submitted contact.
    #[must_use]
    pub const fn editing_id(&self) -> Option<ContactId> {
        self.editing_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Update the name and recompute its error.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.errors.name = self.name.trim().is_empty();
    }

    /// Update the email and recompute its errors.
    ///
    /// An empty email is not flagged as invalid while typing; submit catches it.
    pub fn set_email(&mut self, value: impl Into<String>, existing: &[Contact]) {
        self.email = value.into();
        self.errors.email_exists = self.email_taken(existing);
        self.errors.email_invalid = !self.email.is_empty() && !is_valid_email(&self.email);
    }

    /// Re-run every check and, if all pass, return the assembled contact.
    ///
    /// The returned contact keeps the edited contact's id, or has none when
    /// adding. Fields are passed through untrimmed.
    ///
    /// # Errors
    ///
    /// Returns the error flags when any check fails. They are also kept on the
    /// form so it can be redisplayed.
    pub fn submit(&mut self, existing: &[Contact]) -> Result<Contact, FieldErrors> {
        self.errors = FieldErrors {
            name: self.name.trim().is_empty(),
            email_invalid: self.email.trim().is_empty() || !is_valid_email(&self.email),
            email_exists: self.email_taken(existing),
        };

        if !self.errors.is_clear() {
            return Err(self.errors);
        }

        Ok(Contact {
            id: self.editing_id,
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
        })
    }

    fn email_taken(&self, existing: &[Contact]) -> bool {
        existing
            .iter()
            .any(|c| c.email.as_deref() == Some(self.email.as_str()) && c.id != self.editing_id)
    }
}
