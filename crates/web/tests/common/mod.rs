//! Shared helpers: an in-process contacts API and web client on ephemeral ports.

#![allow(dead_code)]

use contact_list_api::{ApiConfig, AppState as ApiState};
use contact_list_web::{AppState, ContactsClient, WebConfig, config::parse_api_url};
use reqwest::Client;
use tokio::net::TcpListener;
use url::Url;

/// Start a fresh contacts API and return its collection URL.
pub async fn spawn_api() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind api");
    let addr = listener.local_addr().expect("api addr");
    tokio::spawn(async move {
        let app = contact_list_api::app(ApiState::new(ApiConfig::default()));
        axum::serve(listener, app).await.expect("serve api");
    });
    parse_api_url(&format!("http://{addr}/api/contacts")).expect("api url")
}

/// Start the web client against `api_url` and return its base URL.
pub async fn spawn_web(api_url: Url) -> String {
    let state = AppState::new(WebConfig::new(api_url)).expect("web state");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind web");
    let addr = listener.local_addr().expect("web addr");
    tokio::spawn(async move {
        axum::serve(listener, contact_list_web::app(state))
            .await
            .expect("serve web");
    });
    format!("http://{addr}")
}

/// A browser-like HTTP client that keeps the session cookie.
pub fn browser() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

pub fn api_client(api_url: &Url) -> ContactsClient {
    ContactsClient::new(api_url).expect("api client")
}
