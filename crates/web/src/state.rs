//! Application state shared across handlers.

use std::sync::Arc;

use crate::client::{ClientError, ContactsClient};
use crate::config::WebConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the contacts API client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    contacts: ContactsClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: WebConfig) -> Result<Self, ClientError> {
        let contacts = ContactsClient::new(&config.api_url)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, contacts }),
        })
    }

    /// Get a reference to the web configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the contacts API client.
    #[must_use]
    pub fn contacts(&self) -> &ContactsClient {
        &self.inner.contacts
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::parse_api_url;

    #[test]
    fn test_client_follows_configured_api_url() {
        let url = parse_api_url("http://127.0.0.1:5001/api/contacts/").unwrap();
        let state = AppState::new(WebConfig::new(url)).unwrap();
        assert_eq!(state.config().port, 3000);
        assert_eq!(
            state.contacts().base_url(),
            "http://127.0.0.1:5001/api/contacts"
        );
    }
}
