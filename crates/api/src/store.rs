//! In-memory contact store.
//!
//! The store owns the contact collection and the id counter. It is a cheap
//! handle (`Arc` inside) so the router state can clone it into every request,
//! and independent instances never share data.
//!
//! Every write takes the single `RwLock`, so id assignment and the collection
//! update happen as one step even on a multi-threaded runtime. Ids therefore
//! stay unique and strictly increasing, and are never reused after a delete.

use std::sync::Arc;

use contact_list_core::{Contact, ContactId, ContactInput, Email, EmailError};
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors returned by [`ContactStore`] operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No contact has the requested id.
    #[error("Contact not found")]
    NotFound(ContactId),

    /// Strict mode rejected the payload.
    #[error("{0}")]
    Invalid(&'static str),

    /// Strict mode found another contact with the same email.
    #[error("Email already exists")]
    DuplicateEmail,

    /// The id counter reached `i32::MAX`.
    #[error("Contact ids exhausted")]
    IdsExhausted,
}

/// How much the store checks the payloads it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Accept any payload, including missing fields.
    #[default]
    Lenient,
    /// Apply the client form rules: non-blank name, well-formed email and an
    /// email no other contact uses.
    Strict,
}

impl From<EmailError> for StoreError {
    fn from(err: EmailError) -> Self {
        match err {
            EmailError::Empty => Self::Invalid("Email is required"),
            EmailError::Malformed => Self::Invalid("Please enter a valid email"),
        }
    }
}

struct Inner {
    contacts: Vec<Contact>,
    next_id: Option<ContactId>,
}

/// Shared handle to an in-memory contact collection.
#[derive(Clone)]
pub struct ContactStore {
    inner: Arc<RwLock<Inner>>,
    validation: ValidationMode,
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new(ValidationMode::default())
    }
}

impl ContactStore {
    /// Create an empty store whose first contact gets id 1.
    #[must_use]
    pub fn new(validation: ValidationMode) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                contacts: Vec::new(),
                next_id: Some(ContactId::FIRST),
            })),
            validation,
        }
    }

    #[must_use]
    pub const fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Every contact, in insertion order.
    pub async fn list(&self) -> Vec<Contact> {
        self.inner.read().await.contacts.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.contacts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.contacts.is_empty()
    }

    /// Assign the next id and append a new contact.
    ///
    /// # Errors
    ///
    /// Fails in strict mode when the payload breaks a form rule, and when the
    /// id counter is exhausted.
    pub async fn create(&self, input: ContactInput) -> Result<Contact, StoreError> {
        let mut inner = self.inner.write().await;
        self.check(&inner.contacts, &input, None)?;

        let id = inner.next_id.ok_or(StoreError::IdsExhausted)?;
        inner.next_id = id.next();

        let contact = input.into_contact(id);
        inner.contacts.push(contact.clone());
        tracing::debug!(%id, "contact created");
        Ok(contact)
    }

    /// Look up a contact by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no contact has that id.
    pub async fn get(&self, id: ContactId) -> Result<Contact, StoreError> {
        self.inner
            .read()
            .await
            .contacts
            .iter()
            .find(|c| c.id == Some(id))
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Overwrite the name and email of a contact in place.
    ///
    /// Fields missing from `input` become absent on the record. The id never
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no contact has that id, or a
    /// validation error in strict mode. The collection is untouched on error.
    pub async fn update(&self, id: ContactId, input: ContactInput) -> Result<Contact, StoreError> {
        let mut inner = self.inner.write().await;
        let index = position(&inner.contacts, id).ok_or(StoreError::NotFound(id))?;
        self.check(&inner.contacts, &input, Some(id))?;

        let contact = inner
            .contacts
            .get_mut(index)
            .ok_or(StoreError::NotFound(id))?;
        contact.name = input.name;
        contact.email = input.email;
        tracing::debug!(%id, "contact updated");
        Ok(contact.clone())
    }

    /// Remove a contact and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no contact has that id.
    pub async fn delete(&self, id: ContactId) -> Result<Contact, StoreError> {
        let mut inner = self.inner.write().await;
        let index = position(&inner.contacts, id).ok_or(StoreError::NotFound(id))?;
        let removed = inner.contacts.remove(index);
        tracing::debug!(%id, "contact deleted");
        Ok(removed)
    }

    fn check(
        &self,
        contacts: &[Contact],
        input: &ContactInput,
        editing: Option<ContactId>,
    ) -> Result<(), StoreError> {
        if self.validation == ValidationMode::Lenient {
            return Ok(());
        }

        if input.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
            return Err(StoreError::Invalid("Name is required"));
        }

        let email = Email::parse(input.email.as_deref().unwrap_or_default())?;

        if contacts
            .iter()
            .any(|c| c.email.as_deref() == Some(email.as_str()) && c.id != editing)
        {
            return Err(StoreError::DuplicateEmail);
        }

        Ok(())
    }
}

fn position(contacts: &[Contact], id: ContactId) -> Option<usize> {
    contacts.iter().position(|c| c.id == Some(id))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn alice() -> ContactInput {
        ContactInput::new("Alice", "alice@example.com")
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let store = ContactStore::default();
        let a = store.create(alice()).await.unwrap();
        let b = store.create(ContactInput::new("Bob", "bob@example.com")).await.unwrap();
        assert_eq!(a.id, Some(ContactId::new(1)));
        assert_eq!(b.id, Some(ContactId::new(2)));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = ContactStore::default();
        store.create(alice()).await.unwrap();
        let second = store.create(alice()).await.unwrap();
        store.delete(second.id.unwrap()).await.unwrap();

        let third = store.create(alice()).await.unwrap();
        assert_eq!(third.id, Some(ContactId::new(3)));
    }

    #[tokio::test]
    async fn test_get_returns_created_fields() {
        let store = ContactStore::default();
        let created = store.create(alice()).await.unwrap();
        let fetched = store.get(created.id.unwrap()).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name(), "Alice");
        assert_eq!(fetched.email(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_lenient_keeps_missing_fields_absent() {
        let store = ContactStore::default();
        let created = store.create(ContactInput::default()).await.unwrap();
        assert_eq!(created.name, None);
        assert_eq!(created.email, None);

        // duplicates and malformed emails are accepted too
        store.create(ContactInput::new("", "nope")).await.unwrap();
        store.create(ContactInput::new("", "nope")).await.unwrap();
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_update_changes_only_name_and_email() {
        let store = ContactStore::default();
        let created = store.create(alice()).await.unwrap();
        let id = created.id.unwrap();

        let updated = store
            .update(id, ContactInput::new("Alice B", "alice@example.com"))
            .await
            .unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name(), "Alice B");
        assert_eq!(store.get(id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_leaves_collection() {
        let store = ContactStore::default();
        store.create(alice()).await.unwrap();
        let before = store.list().await;

        let err = store
            .update(ContactId::new(42), ContactInput::new("X", "x@y.z"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound(ContactId::new(42)));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let store = ContactStore::default();
        let a = store.create(alice()).await.unwrap();
        let b = store.create(ContactInput::new("Bob", "bob@example.com")).await.unwrap();

        let removed = store.delete(a.id.unwrap()).await.unwrap();
        assert_eq!(removed, a);
        assert_eq!(store.list().await, vec![b]);
        assert!(matches!(
            store.get(a.id.unwrap()).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_keeps_length() {
        let store = ContactStore::default();
        store.create(alice()).await.unwrap();
        assert!(store.delete(ContactId::new(7)).await.is_err());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let store = ContactStore::default();
        for name in ["c", "a", "b"] {
            store
                .create(ContactInput::new(name, format!("{name}@x.io")))
                .await
                .unwrap();
        }
        let names: Vec<_> = store
            .list()
            .await
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_instances_are_isolated() {
        let one = ContactStore::default();
        let two = ContactStore::default();
        one.create(alice()).await.unwrap();
        assert!(two.is_empty().await);
        assert_eq!(
            two.create(alice()).await.unwrap().id,
            Some(ContactId::FIRST)
        );
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = ContactStore::default();
        let mut handles = Vec::new();
        for i in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create(ContactInput::new(format!("n{i}"), format!("n{i}@x.io")))
                    .await
                    .unwrap()
                    .id
                    .unwrap()
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().as_i32());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=50).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_strict_rejects_bad_payloads() {
        let store = ContactStore::new(ValidationMode::Strict);
        assert_eq!(
            store.create(ContactInput::new("  ", "a@b.c")).await,
            Err(StoreError::Invalid("Name is required"))
        );
        assert_eq!(
            store
                .create(ContactInput {
                    name: Some("A".into()),
                    email: None
                })
                .await,
            Err(StoreError::Invalid("Email is required"))
        );
        assert_eq!(
            store.create(ContactInput::new("A", "")).await,
            Err(StoreError::Invalid("Email is required"))
        );
        assert_eq!(
            store.create(ContactInput::new("A", "a@b")).await,
            Err(StoreError::Invalid("Please enter a valid email"))
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_strict_duplicate_email() {
        let store = ContactStore::new(ValidationMode::Strict);
        let a = store.create(alice()).await.unwrap();
        let b = store.create(ContactInput::new("Bob", "bob@example.com")).await.unwrap();

        assert_eq!(
            store.create(alice()).await,
            Err(StoreError::DuplicateEmail)
        );
        // own email is fine on update, someone else's is not
        assert!(store.update(a.id.unwrap(), alice()).await.is_ok());
        assert_eq!(
            store.update(b.id.unwrap(), alice()).await,
            Err(StoreError::DuplicateEmail)
        );
    }

    #[tokio::test]
    async fn test_strict_update_missing_is_not_found_first() {
        let store = ContactStore::new(ValidationMode::Strict);
        assert_eq!(
            store.update(ContactId::new(1), ContactInput::default()).await,
            Err(StoreError::NotFound(ContactId::new(1)))
        );
    }
}
