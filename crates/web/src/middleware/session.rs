//! Session middleware configuration.
//!
//! Each browser gets its own shell state (table toggle, open dialog, pending
//! notification) kept in an in-memory session store. Contacts themselves
//! are never stored here; they are always fetched from the API.

use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::shell::ShellState;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "contact_list_session";

/// Session key holding the serialized [`ShellState`].
pub const SHELL_STATE_KEY: &str = "shell";

/// Session expiry time in seconds (1 day).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// Read the shell state, defaulting when the session is new.
///
/// # Errors
///
/// Returns error if the session store fails or the value cannot be decoded.
pub async fn load_shell_state(session: &Session) -> Result<ShellState, tower_sessions::session::Error> {
    Ok(session
        .get::<ShellState>(SHELL_STATE_KEY)
        .await?
        .unwrap_or_default())
}

/// Write the shell state back if it differs from what was loaded.
///
/// An unchanged state leaves the session untouched, so a browser that only
/// looks at the page never gets a session record or cookie.
///
/// # Errors
///
/// Returns error if the session store fails.
pub async fn save_shell_state(
    session: &Session,
    loaded: &ShellState,
    state: &ShellState,
) -> Result<(), tower_sessions::session::Error> {
    if loaded == state {
        return Ok(());
    }
    session.insert(SHELL_STATE_KEY, state).await
}
