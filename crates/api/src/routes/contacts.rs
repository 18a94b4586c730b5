//! Contact resource handlers.
//!
//! Bodies and responses are JSON. The only lookup failure is a missing id,
//! answered with 404 `Contact not found`; a path segment that is not an
//! integer can never match and gets the same answer.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use contact_list_core::{Contact, ContactId, ContactInput};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

fn parse_id(raw: &str) -> Result<ContactId> {
    raw.parse().map_err(|_| AppError::NotFound)
}

/// List every contact in storage order.
///
/// GET /api/contacts
pub async fn list(State(state): State<AppState>) -> Json<Vec<Contact>> {
    Json(state.store().list().await)
}

/// Create a contact.
///
/// POST /api/contacts
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ContactInput>,
) -> Result<impl IntoResponse> {
    let contact = state.store().create(input).await?;
    tracing::info!(id = ?contact.id, "Contact created");
    Ok((StatusCode::CREATED, Json(contact)))
}

/// Fetch one contact.
///
/// GET /api/contacts/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Contact>> {
    let id = parse_id(&id)?;
    Ok(Json(state.store().get(id).await?))
}

/// Replace a contact's name and email.
///
/// PUT /api/contacts/{id}
#[instrument(skip(state, input))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ContactInput>,
) -> Result<Json<Contact>> {
    let id = parse_id(&id)?;
    let contact = state.store().update(id, input).await?;
    tracing::info!(%id, "Contact updated");
    Ok(Json(contact))
}

/// Remove a contact.
///
/// DELETE /api/contacts/{id}
#[instrument(skip(state))]
pub async fn destroy(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    state.store().delete(id).await?;
    tracing::info!(%id, "Contact deleted");
    Ok(StatusCode::NO_CONTENT)
}
