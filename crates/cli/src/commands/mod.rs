//! CLI command implementations.

pub mod contacts;
