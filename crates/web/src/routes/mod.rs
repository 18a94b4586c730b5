//! HTTP route handlers for the web client.
//!
//! Browsers cannot send PUT or DELETE from a plain form, so every mutation is
//! a POST here; the handlers translate them to the matching API call and
//! redirect back to `/`.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Contact list page
//! GET  /health                    - Health check
//! POST /toggle                    - Show or hide the contacts table
//!
//! # Dialog
//! GET  /contacts/new              - Open the dialog in add mode
//! GET  /contacts/{id}/edit        - Open the dialog in edit mode
//! POST /contacts/form             - Submit the dialog
//! POST /contacts/form/validate    - Re-validate while typing (HTMX fragment)
//! POST /contacts/form/cancel      - Close the dialog
//!
//! # Table actions
//! POST /contacts/{id}/delete      - Delete a contact
//! ```

pub mod contacts;
pub mod home;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Where every action lands once it is done.
pub(crate) fn back_home() -> Redirect {
    Redirect::to("/")
}

/// Create the contact dialog and table action routes.
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/new", get(contacts::new_form))
        .route("/form", post(contacts::submit))
        .route("/form/validate", post(contacts::validate))
        .route("/form/cancel", post(contacts::cancel))
        .route("/{id}/edit", get(contacts::edit_form))
        .route("/{id}/delete", post(contacts::delete))
}

/// Create all routes for the web client.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health))
        .route("/toggle", post(home::toggle))
        .nest("/contacts", contact_routes())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
