//! Application shell: the client-side view of the contact list.
//!
//! The shell mirrors the server collection and owns the UI state around it:
//! whether the table is shown, whether the add/edit dialog is open and for
//! which contact, and the last status notification.
//!
//! The mirror is only ever replaced wholesale. Every mutation is followed by
//! a full [`ContactShell::fetch_contacts`], so the table reflects the server
//! after the round trip and never an optimistic local guess.

use contact_list_core::{Contact, ContactId, FormMode};
use serde::{Deserialize, Serialize};

use crate::client::{ClientError, ContactsClient};

/// How long a notification stays on screen, in milliseconds.
pub const NOTIFICATION_AUTO_HIDE_MS: u32 = 3000;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A transient status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

/// The open add/edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub mode: FormMode,
    /// Contact being edited; `None` when adding.
    pub selected: Option<Contact>,
}

/// UI state that outlives a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    pub show_contacts: bool,
    pub form: Option<FormState>,
    pub notification: Option<Notification>,
}

/// The contact list application shell.
pub struct ContactShell<'a> {
    client: &'a ContactsClient,
    state: ShellState,
    contacts: Vec<Contact>,
}

impl<'a> ContactShell<'a> {
    /// Shell with an empty mirror; call [`Self::fetch_contacts`] to load it.
    #[must_use]
    pub const fn new(client: &'a ContactsClient, state: ShellState) -> Self {
        Self {
            client,
            state,
            contacts: Vec::new(),
        }
    }

    /// Contacts as of the last fetch.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contact with the given id in the local mirror.
    #[must_use]
    pub fn find(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == Some(id))
    }

    #[must_use]
    pub const fn state(&self) -> &ShellState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> ShellState {
        self.state
    }

    /// Replace the mirror with the server's current collection.
    ///
    /// # Errors
    ///
    /// Returns error if the API cannot be reached or answers with an error.
    pub async fn fetch_contacts(&mut self) -> Result<(), ClientError> {
        self.contacts = self.client.list().await?;
        Ok(())
    }

    /// Create a contact, refresh, and report success.
    ///
    /// # Errors
    ///
    /// Returns error if the create or the refresh fails.
    pub async fn add_contact(&mut self, contact: &Contact) -> Result<(), ClientError> {
        self.client.create(&contact.to_input()).await?;
        self.fetch_contacts().await?;
        self.notify(
            format!("Contact {} added successfully!", contact.name()),
            Severity::Success,
        );
        Ok(())
    }

    /// Update a contact, refresh, and report it.
    ///
    /// A contact without an id is logged and ignored; the API is not called.
    ///
    /// # Errors
    ///
    /// Returns error if the update or the refresh fails.
    pub async fn update_contact(&mut self, contact: &Contact) -> Result<(), ClientError> {
        let Some(id) = contact.id else {
            tracing::error!("the contact object is missing or undefined");
            return Ok(());
        };

        self.client.update(id, &contact.to_input()).await?;
        self.fetch_contacts().await?;
        self.notify(
            format!("Contact {} updated successfully!", contact.name()),
            Severity::Info,
        );
        Ok(())
    }

    /// Delete a contact, refresh, and report it.
    ///
    /// # Errors
    ///
    /// Returns error if the delete or the refresh fails.
    pub async fn delete_contact(&mut self, id: ContactId) -> Result<(), ClientError> {
        self.client.delete(id).await?;
        self.fetch_contacts().await?;
        self.notify("Contact deleted successfully!", Severity::Error);
        Ok(())
    }

    /// Open the dialog in add mode.
    pub fn open_add_form(&mut self) {
        self.state.form = Some(FormState {
            mode: FormMode::Add,
            selected: None,
        });
    }

    /// Open the dialog in edit mode for `contact`.
    pub fn open_edit_form(&mut self, contact: Contact) {
        self.state.form = Some(FormState {
            mode: FormMode::Edit,
            selected: Some(contact),
        });
    }

    /// Close the dialog and forget the selected contact.
    pub fn close_form(&mut self) {
        self.state.form = None;
    }

    /// Hand a validated contact to add or update, depending on the dialog
    /// mode, and close the dialog.
    ///
    /// The dialog is closed before the request goes out, so it stays closed
    /// even if the request fails.
    ///
    /// # Errors
    ///
    /// Returns error if the add or update fails.
    pub async fn submit_form(&mut self, contact: &Contact) -> Result<(), ClientError> {
        let mode = self.state.form.as_ref().map(|f| f.mode).unwrap_or_default();
        self.close_form();

        match mode {
            FormMode::Edit => self.update_contact(contact).await,
            FormMode::Add => self.add_contact(contact).await,
        }
    }

    /// Show or hide the contacts table.
    pub const fn toggle_contacts(&mut self) {
        self.state.show_contacts = !self.state.show_contacts;
    }

    /// Remove and return the pending notification.
    pub const fn take_notification(&mut self) -> Option<Notification> {
        self.state.notification.take()
    }

    fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.state.notification = Some(Notification::new(message, severity));
    }
}
