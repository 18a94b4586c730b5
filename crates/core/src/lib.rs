//! Contact List Core - Shared types library.
//!
//! This crate provides common types used across all Contact List components:
//! - `api` - REST API holding the in-memory contact store
//! - `web` - Browser client rendered on the server
//! - `cli` - Terminal client for the same API
//!
//! # Architecture
//!
//! The core crate contains only types and pure validation logic - no I/O, no
//! HTTP clients, no async. This keeps it lightweight and lets the store and
//! every client agree on the same rules.
//!
//! # Modules
//!
//! - [`types`] - Contact record, type-safe IDs and the email pattern
//! - [`form`] - Add/edit contact form state machine with field validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod form;
pub mod types;

pub use form::{ContactForm, FieldErrors, FormMode};
pub use types::*;
