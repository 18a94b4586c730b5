//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::store::ContactStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The contact store is created
/// here, lives as long as the router, and is dropped with it at shutdown.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: ContactStore,
}

impl AppState {
    /// Create a new application state with an empty store.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let store = ContactStore::new(config.validation);
        Self::with_store(config, store)
    }

    /// Create application state around an existing store.
    #[must_use]
    pub fn with_store(config: ApiConfig, store: ContactStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the contact store.
    #[must_use]
    pub fn store(&self) -> &ContactStore {
        &self.inner.store
    }
}

#[cfg(test)]
mod tests {
    use crate::store::ValidationMode;

    use super::*;

    #[tokio::test]
    async fn test_state_owns_config_and_store() {
        let state = AppState::new(ApiConfig {
            validation: ValidationMode::Strict,
            ..ApiConfig::default()
        });
        assert_eq!(state.config().port, 5001);
        assert_eq!(state.store().validation(), ValidationMode::Strict);

        let clone = state.clone();
        clone
            .store()
            .create(contact_list_core::ContactInput::new("Alice", "alice@example.com"))
            .await
            .expect("create");
        assert_eq!(state.store().len().await, 1);
    }
}
