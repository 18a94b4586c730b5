//! Presentation components rendered inside page templates.

pub mod contacts_table;
pub mod contact_form;

pub use contact_form::{ContactFormInput, FormView};
pub use contacts_table::{ContactRow, ContactsTable};
