//! Application shell driven against a live in-process API.

mod common;

use contact_list_core::{Contact, ContactId, FormMode};
use contact_list_web::{ClientError, ContactShell, Severity, ShellState};

#[tokio::test]
async fn test_fetch_replaces_the_mirror() {
    let api = common::spawn_api().await;
    let client = common::api_client(&api);
    let mut shell = ContactShell::new(&client, ShellState::default());

    shell.fetch_contacts().await.expect("fetch");
    assert!(shell.contacts().is_empty());

    // a write made behind the shell's back shows up on the next fetch
    client
        .create(&Contact::draft("Alice", "alice@example.com").to_input())
        .await
        .expect("create");
    shell.fetch_contacts().await.expect("fetch");
    assert_eq!(shell.contacts().len(), 1);
}

#[tokio::test]
async fn test_add_update_delete_with_notifications() {
    let api = common::spawn_api().await;
    let client = common::api_client(&api);
    let mut shell = ContactShell::new(&client, ShellState::default());

    shell
        .add_contact(&Contact::draft("Alice", "alice@example.com"))
        .await
        .expect("add");
    assert_eq!(shell.contacts().len(), 1);
    let note = shell.take_notification().expect("notification");
    assert_eq!(note.message, "Contact Alice added successfully!");
    assert_eq!(note.severity, Severity::Success);

    let stored = shell.contacts()[0].clone();
    assert_eq!(stored.id, Some(ContactId::new(1)));

    let renamed = Contact {
        name: Some("Alice B".to_string()),
        ..stored
    };
    shell.update_contact(&renamed).await.expect("update");
    assert_eq!(shell.contacts()[0].name(), "Alice B");
    let note = shell.take_notification().expect("notification");
    assert_eq!(note.message, "Contact Alice B updated successfully!");
    assert_eq!(note.severity, Severity::Info);

    shell.delete_contact(ContactId::new(1)).await.expect("delete");
    assert!(shell.contacts().is_empty());
    let note = shell.take_notification().expect("notification");
    assert_eq!(note.message, "Contact deleted successfully!");
    assert_eq!(note.severity, Severity::Error);
}

#[tokio::test]
async fn test_submit_form_dispatches_on_mode_and_closes() {
    let api = common::spawn_api().await;
    let client = common::api_client(&api);
    let mut shell = ContactShell::new(&client, ShellState::default());

    shell.open_add_form();
    shell
        .submit_form(&Contact::draft("Bob", "bob@example.com"))
        .await
        .expect("submit add");
    assert!(shell.state().form.is_none());
    assert_eq!(shell.contacts().len(), 1);

    let bob = shell.contacts()[0].clone();
    shell.open_edit_form(bob.clone());
    assert_eq!(
        shell.state().form.as_ref().map(|f| f.mode),
        Some(FormMode::Edit)
    );
    shell
        .submit_form(&Contact {
            email: Some("robert@example.com".to_string()),
            ..bob
        })
        .await
        .expect("submit edit");
    assert!(shell.state().form.is_none());
    assert_eq!(shell.contacts().len(), 1);
    assert_eq!(shell.contacts()[0].email(), "robert@example.com");
}

#[tokio::test]
async fn test_deleting_a_missing_contact_is_not_found() {
    let api = common::spawn_api().await;
    let client = common::api_client(&api);
    let mut shell = ContactShell::new(&client, ShellState::default());

    let err = shell.delete_contact(ContactId::new(5)).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(msg) if msg == "Contact not found"));
    assert_eq!(shell.state().notification, None);
}
