//! Core types for Contact List.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod contact;
pub mod email;
pub mod id;

pub use contact::{Contact, ContactInput};
pub use email::{Email, EmailError, is_valid_email};
pub use id::*;
