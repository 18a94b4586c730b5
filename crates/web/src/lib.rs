//! Contact List web client library.
//!
//! This crate provides the browser client as a library, allowing it to be
//! tested in-process and reused by the terminal client. It contains the
//! contacts API client, the application shell and the server-rendered UI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod components;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod shell;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use client::{ClientError, ContactsClient};
pub use config::WebConfig;
pub use shell::{ContactShell, Notification, Severity, ShellState};
pub use state::AppState;

/// Build the full router: pages, sessions and request tracing.
///
/// Sentry layers are left to the binary so tests do not need a client.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .layer(middleware::create_session_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
