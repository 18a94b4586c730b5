//! Contact dialog and table action handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use contact_list_core::ContactId;
use tower_sessions::Session;
use tracing::instrument;

use crate::client::ClientError;
use crate::components::{ContactFormInput, FormView};
use crate::error::{AppError, Result};
use crate::middleware::{load_shell_state, save_shell_state};
use crate::routes::home::IndexTemplate;
use crate::shell::{ContactShell, ShellState};
use crate::state::AppState;

/// Keystroke validation fragment (for HTMX).
///
/// Only the error texts and touched flags are swapped, out of band; the
/// inputs stay as the user is typing them.
#[derive(Template, WebTemplate)]
#[template(path = "partials/contact_form_feedback.html")]
pub struct FormFeedbackTemplate {
    pub form: FormView,
}

fn parse_id(raw: &str) -> Result<ContactId> {
    raw.parse()
        .map_err(|_| AppError::NotFound(raw.to_string()))
}

/// Save the shell state, then surface the outcome of the API call.
///
/// The state is written even when the call failed so that, for example, a
/// dialog closed by the action stays closed.
async fn finish(
    session: &Session,
    loaded: &ShellState,
    shell: &ContactShell<'_>,
    outcome: std::result::Result<(), ClientError>,
) -> Result<Redirect> {
    save_shell_state(session, loaded, shell.state()).await?;
    outcome?;
    Ok(super::back_home())
}

/// Open the dialog in add mode.
pub async fn new_form(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let loaded = load_shell_state(&session).await?;
    let mut shell = ContactShell::new(state.contacts(), loaded.clone());
    shell.open_add_form();
    finish(&session, &loaded, &shell, Ok(())).await
}

/// Open the dialog in edit mode for a contact from the current collection.
#[instrument(skip(state, session))]
pub async fn edit_form(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let id = parse_id(&id)?;
    let loaded = load_shell_state(&session).await?;
    let mut shell = ContactShell::new(state.contacts(), loaded.clone());
    shell.fetch_contacts().await?;

    let contact = shell
        .find(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    shell.open_edit_form(contact);
    finish(&session, &loaded, &shell, Ok(())).await
}

/// Close the dialog without submitting.
pub async fn cancel(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let loaded = load_shell_state(&session).await?;
    let mut shell = ContactShell::new(state.contacts(), loaded.clone());
    shell.close_form();
    finish(&session, &loaded, &shell, Ok(())).await
}

/// Submit the dialog.
///
/// A form that fails validation is rendered again with its errors and never
/// reaches the API.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<ContactFormInput>,
) -> Result<Response> {
    let loaded = load_shell_state(&session).await?;
    let mut shell = ContactShell::new(state.contacts(), loaded.clone());
    shell.fetch_contacts().await?;

    let form_state = shell.state().form.clone().unwrap_or_default();
    let mut form = input.fill(&form_state, shell.contacts());

    match form.submit(shell.contacts()) {
        Ok(contact) => {
            let outcome = shell.submit_form(&contact).await;
            Ok(finish(&session, &loaded, &shell, outcome).await?.into_response())
        }
        Err(errors) => {
            tracing::debug!(?errors, "Contact form rejected");
            let page = IndexTemplate::render_shell(&shell, Some(FormView::new(&form, true, true)), None);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
    }
}

/// Re-validate the dialog fields after a keystroke.
///
/// Answers with the feedback fragment only; the session is not written.
pub async fn validate(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<ContactFormInput>,
) -> Result<FormFeedbackTemplate> {
    let mut shell = ContactShell::new(state.contacts(), load_shell_state(&session).await?);
    shell.fetch_contacts().await?;

    let form_state = shell.state().form.clone().unwrap_or_default();
    let form = input.replay(&form_state, shell.contacts());

    Ok(FormFeedbackTemplate {
        form: FormView::new(&form, input.name_touched(), input.email_touched()),
    })
}

/// Delete a contact from the table.
#[instrument(skip(state, session))]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let id = parse_id(&id)?;
    let loaded = load_shell_state(&session).await?;
    let mut shell = ContactShell::new(state.contacts(), loaded.clone());
    let outcome = shell.delete_contact(id).await;
    finish(&session, &loaded, &shell, outcome).await
}

#[cfg(test)]
mod tests {
    use contact_list_core::{ContactForm, FormMode};

    use super::*;

    fn feedback(name: &str, email: &str) -> String {
        let mut form = ContactForm::open(FormMode::Add, None);
        form.set_name(name);
        form.set_email(email, &[]);
        FormFeedbackTemplate {
            form: FormView::new(&form, true, true),
        }
        .render()
        .expect("render feedback")
    }

    #[test]
    fn test_feedback_leaves_inputs_alone() {
        let html = feedback("ali", "ali@");
        assert!(!html.contains("name=\"name\""));
        assert!(!html.contains("name=\"email\""));
        assert!(!html.contains("ali@"));
        assert!(html.contains("hx-swap-oob"));
    }

    #[test]
    fn test_feedback_carries_errors_and_touched_flags() {
        let html = feedback(" ", "bad");
        assert!(html.contains("id=\"name-error\""));
        assert!(html.contains("Name is required"));
        assert!(html.contains("id=\"email-error\""));
        assert!(html.contains("Please enter a valid email"));
        assert!(html.contains("name=\"name_touched\" value=\"true\""));

        let html = feedback("Alice", "alice@example.com");
        assert!(!html.contains("Name is required"));
        assert!(!html.contains("Please enter a valid email"));
    }
}
