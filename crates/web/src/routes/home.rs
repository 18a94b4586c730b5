//! Contact list page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::components::{ContactsTable, FormView};
use crate::error::Result;
use crate::filters;
use crate::middleware::{load_shell_state, save_shell_state};
use crate::shell::{ContactShell, NOTIFICATION_AUTO_HIDE_MS, Notification};
use crate::state::AppState;

/// Contact list page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub show_contacts: bool,
    pub table: ContactsTable,
    pub dialog: Option<FormView>,
    pub notification: Option<Notification>,
    pub auto_hide_ms: u32,
}

impl IndexTemplate {
    /// Page for the shell as it stands, with an explicit dialog view.
    #[must_use]
    pub fn render_shell(
        shell: &ContactShell<'_>,
        dialog: Option<FormView>,
        notification: Option<Notification>,
    ) -> Self {
        Self {
            show_contacts: shell.state().show_contacts,
            table: ContactsTable::new(shell.contacts()),
            dialog,
            notification,
            auto_hide_ms: NOTIFICATION_AUTO_HIDE_MS,
        }
    }
}

/// Display the contact list page.
///
/// Fetches the full collection on every load and shows the pending
/// notification once, after the fetch succeeded.
#[instrument(skip_all)]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let loaded = load_shell_state(&session).await?;
    let mut shell = ContactShell::new(state.contacts(), loaded.clone());
    // a failed fetch keeps the pending notification for the next load
    shell.fetch_contacts().await?;
    let notification = shell.take_notification();
    save_shell_state(&session, &loaded, shell.state()).await?;

    let dialog = shell.state().form.as_ref().map(FormView::opened);
    Ok(IndexTemplate::render_shell(&shell, dialog, notification))
}

/// Show or hide the contacts table.
pub async fn toggle(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let loaded = load_shell_state(&session).await?;
    let mut shell = ContactShell::new(state.contacts(), loaded.clone());
    shell.toggle_contacts();
    save_shell_state(&session, &loaded, shell.state()).await?;
    Ok(super::back_home())
}
