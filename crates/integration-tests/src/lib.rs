//! Integration tests for Contact List.
//!
//! Both services run in-process on ephemeral ports, the web client pointed at
//! the API exactly as it would be in production.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p contact-list-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `api_lifecycle` - REST API round trips
//! - `browser_flow` - Pages served by the web client, backed by the API

use std::net::SocketAddr;

use contact_list_api::{ApiConfig, ValidationMode};
use reqwest::Client;
use tokio::net::TcpListener;
use url::Url;

/// A running API and web client pair.
pub struct TestContext {
    /// Cookie-keeping client, so the web session survives between requests
    pub client: Client,
    /// Contacts collection URL, e.g. `http://127.0.0.1:PORT/api/contacts`
    pub api_url: Url,
    /// Web client base URL
    pub web_url: String,
}

impl TestContext {
    /// Start a lenient API and a web client in front of it.
    ///
    /// # Panics
    ///
    /// Panics if a listener cannot be bound.
    pub async fn new() -> Self {
        Self::with_validation(ValidationMode::Lenient).await
    }

    /// Start an API with the given payload checks and a web client in front
    /// of it.
    ///
    /// # Panics
    ///
    /// Panics if a listener cannot be bound.
    #[allow(clippy::expect_used)]
    pub async fn with_validation(validation: ValidationMode) -> Self {
        let api_state = contact_list_api::AppState::new(ApiConfig {
            validation,
            ..ApiConfig::default()
        });
        let api_addr = serve(contact_list_api::app(api_state)).await;
        let api_url = Url::parse(&format!("http://{api_addr}/api/contacts"))
            .expect("api url");

        let web_state = contact_list_web::AppState::new(contact_list_web::WebConfig::new(
            api_url.clone(),
        ))
        .expect("web state");
        let web_addr = serve(contact_list_web::app(web_state)).await;

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_url,
            web_url: format!("http://{web_addr}"),
        }
    }

    /// URL of one contact in the API.
    #[must_use]
    pub fn contact_url(&self, id: i32) -> String {
        format!("{}/{id}", self.api_url.as_str().trim_end_matches('/'))
    }

    /// URL of a web client page.
    #[must_use]
    pub fn page(&self, path: &str) -> String {
        format!("{}{path}", self.web_url)
    }
}

#[allow(clippy::expect_used)]
async fn serve(app: axum::Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}
