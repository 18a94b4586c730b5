//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health               - Liveness check
//!
//! # Contacts
//! GET    /api/contacts[/]      - List every contact
//! POST   /api/contacts[/]      - Create a contact (201)
//! GET    /api/contacts/{id}    - Fetch one contact (404 if missing)
//! PUT    /api/contacts/{id}    - Replace name and email (404 if missing)
//! DELETE /api/contacts/{id}    - Remove a contact (204, 404 if missing)
//! ```

pub mod contacts;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Base path of the contacts resource.
pub const CONTACTS_PATH: &str = "/api/contacts";

/// Create the contact routes router.
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(contacts::list).post(contacts::create))
        .route(
            "/{id}",
            get(contacts::show)
                .put(contacts::update)
                .delete(contacts::destroy),
        )
}

/// Collection path with a trailing slash, served like [`CONTACTS_PATH`].
pub const CONTACTS_PATH_SLASH: &str = "/api/contacts/";

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route(
            CONTACTS_PATH_SLASH,
            get(contacts::list).post(contacts::create),
        )
        .nest(CONTACTS_PATH, contact_routes())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
