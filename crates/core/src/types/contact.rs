//! The contact record and the request payload used to create or update one.

use serde::{Deserialize, Serialize};

use super::id::ContactId;

/// A contact as stored by the API and mirrored by clients.
///
/// `id` is absent until the store assigns one. `name` and `email` are absent
/// when the request that wrote them left them out; the store does not fill
/// them in. Absent fields are omitted from JSON rather than sent as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContactId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Contact {
    /// A contact that has not been stored yet.
    #[must_use]
    pub fn draft(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Display name, empty when absent.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Email address, empty when absent.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    /// The create/update payload carrying this contact's fields.
    #[must_use]
    pub fn to_input(&self) -> ContactInput {
        ContactInput {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Body of `POST /api/contacts` and `PUT /api/contacts/{id}`.
///
/// Unknown fields, including an `id`, are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactInput {
    /// Payload with both fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Turn the payload into a stored record with the given id.
    #[must_use]
    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id: Some(id),
            name: self.name,
            email: self.email,
        }
    }
}
