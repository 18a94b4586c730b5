//! Contact commands.
//!
//! Writes go through the same shell and form rules as the browser client, so
//! a contact the dialog would reject is rejected here before any request.

use contact_list_core::{Contact, ContactForm, ContactId, FieldErrors, FormMode};
use contact_list_web::{ContactShell, ContactsClient, ShellState};
use thiserror::Error;
use tracing::info;

/// Errors raised before a request is sent.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Contact {0} not found")]
    NotFound(ContactId),

    #[error("{}", describe(.0))]
    Invalid(FieldErrors),
}

fn describe(errors: &FieldErrors) -> String {
    [errors.name_message(), errors.email_message()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("; ")
}

fn log_contact(contact: &Contact) {
    let id = contact.id.map(|id| id.to_string()).unwrap_or_default();
    info!("{id:>4}  {:<24}  {}", contact.name(), contact.email());
}

/// Print every contact.
///
/// # Errors
///
/// Returns an error if the API cannot be reached.
pub async fn list(client: &ContactsClient) -> Result<(), Box<dyn std::error::Error>> {
    let contacts = client.list().await?;
    if contacts.is_empty() {
        info!("No contacts available.");
        return Ok(());
    }

    for contact in &contacts {
        log_contact(contact);
    }
    info!(count = contacts.len(), "Listed contacts");
    Ok(())
}

/// Print one contact.
///
/// # Errors
///
/// Returns an error if the id is unknown or the API cannot be reached.
pub async fn show(client: &ContactsClient, id: ContactId) -> Result<(), Box<dyn std::error::Error>> {
    let contact = client.get(id).await?;
    log_contact(&contact);
    Ok(())
}

/// Validate and add a contact.
///
/// # Errors
///
/// Returns an error if the fields fail validation or the request fails.
pub async fn add(
    client: &ContactsClient,
    name: String,
    email: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut shell = ContactShell::new(client, ShellState::default());
    shell.fetch_contacts().await?;

    let contact = validated(ContactForm::open(FormMode::Add, None), name, email, shell.contacts())?;
    shell.add_contact(&contact).await?;
    report(&mut shell);
    Ok(())
}

/// Validate and update a contact; omitted fields keep their current value.
///
/// # Errors
///
/// Returns an error if the id is unknown, the fields fail validation, or the
/// request fails.
pub async fn edit(
    client: &ContactsClient,
    id: ContactId,
    name: Option<String>,
    email: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut shell = ContactShell::new(client, ShellState::default());
    shell.fetch_contacts().await?;

    let current = shell.find(id).cloned().ok_or(CommandError::NotFound(id))?;
    let form = ContactForm::open(FormMode::Edit, Some(&current));
    let name = name.unwrap_or_else(|| current.name().to_owned());
    let email = email.unwrap_or_else(|| current.email().to_owned());

    let contact = validated(form, name, email, shell.contacts())?;
    shell.update_contact(&contact).await?;
    report(&mut shell);
    Ok(())
}

/// Delete a contact.
///
/// # Errors
///
/// Returns an error if the id is unknown or the API cannot be reached.
pub async fn delete(client: &ContactsClient, id: ContactId) -> Result<(), Box<dyn std::error::Error>> {
    let mut shell = ContactShell::new(client, ShellState::default());
    shell.delete_contact(id).await?;
    report(&mut shell);
    Ok(())
}

fn validated(
    mut form: ContactForm,
    name: String,
    email: String,
    existing: &[Contact],
) -> Result<Contact, CommandError> {
    form.set_name(name);
    form.set_email(email, existing);
    form.submit(existing).map_err(CommandError::Invalid)
}

fn report(shell: &mut ContactShell<'_>) {
    if let Some(notification) = shell.take_notification() {
        info!(severity = notification.severity.as_str(), "{}", notification.message);
    }
}
