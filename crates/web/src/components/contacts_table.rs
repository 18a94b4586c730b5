//! Contacts table component.
//!
//! Pure rendering data: one row per contact with its name, email and the two
//! row actions. Holds no state of its own.

use contact_list_core::Contact;

/// Text shown instead of the table when there are no contacts.
pub const EMPTY_MESSAGE: &str = "No contacts available.";

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub name: String,
    pub email: String,
    /// Link that opens the edit dialog for this contact.
    pub edit_href: Option<String>,
    /// Form action that deletes this contact. `None` when the contact has no
    /// id, in which case the delete button is rendered disabled.
    pub delete_action: Option<String>,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name().to_owned(),
            email: contact.email().to_owned(),
            edit_href: contact.id.map(|id| format!("/contacts/{id}/edit")),
            delete_action: contact.id.map(|id| format!("/contacts/{id}/delete")),
        }
    }
}

/// The contacts table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactsTable {
    pub rows: Vec<ContactRow>,
}

impl ContactsTable {
    #[must_use]
    pub fn new(contacts: &[Contact]) -> Self {
        Self {
            rows: contacts.iter().map(ContactRow::from).collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub const fn empty_message(&self) -> &'static str {
        EMPTY_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use contact_list_core::ContactId;

    use super::*;

    #[test]
    fn test_rows_follow_collection_order() {
        let contacts = vec![
            Contact {
                id: Some(ContactId::new(2)),
                ..Contact::draft("Bob", "bob@example.com")
            },
            Contact {
                id: Some(ContactId::new(1)),
                ..Contact::draft("Alice", "alice@example.com")
            },
        ];
        let table = ContactsTable::new(&contacts);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].name, "Bob");
        assert_eq!(table.rows[0].delete_action.as_deref(), Some("/contacts/2/delete"));
        assert_eq!(table.rows[1].edit_href.as_deref(), Some("/contacts/1/edit"));
    }

    #[test]
    fn test_row_without_id_has_no_actions() {
        let row = ContactRow::from(&Contact::draft("Nobody", "n@x.io"));
        assert_eq!(row.delete_action, None);
        assert_eq!(row.edit_href, None);
    }

    #[test]
    fn test_empty_table() {
        let table = ContactsTable::new(&[]);
        assert!(table.is_empty());
        assert_eq!(table.empty_message(), "No contacts available.");
    }
}
