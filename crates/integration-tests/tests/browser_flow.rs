//! Integration tests for the web client backed by a live API.

use contact_list_core::{Contact, ContactId};
use contact_list_integration_tests::TestContext;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_both_services_report_health() {
    let ctx = TestContext::new().await;

    let api_health = ctx.api_url.join("/health").expect("health url");
    let resp = ctx.client.get(api_health).send().await.expect("api health");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ctx.client.get(ctx.page("/health")).send().await.expect("web health");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_contact_added_in_browser_is_served_by_api() {
    let ctx = TestContext::new().await;

    ctx.client.get(ctx.page("/contacts/new")).send().await.expect("open");
    let resp = ctx
        .client
        .post(ctx.page("/contacts/form"))
        .form(&[("name", "Alice"), ("email", "alice@example.com")])
        .send()
        .await
        .expect("submit");
    assert_eq!(resp.status(), StatusCode::OK);

    let contacts: Vec<Contact> = ctx
        .client
        .get(ctx.api_url.as_str())
        .send()
        .await
        .expect("list")
        .json()
        .await
        .expect("json");
    assert_eq!(
        contacts,
        vec![Contact {
            id: Some(ContactId::new(1)),
            ..Contact::draft("Alice", "alice@example.com")
        }]
    );
}

#[tokio::test]
async fn test_contact_added_through_api_shows_in_table() {
    let ctx = TestContext::new().await;

    ctx.client
        .post(ctx.api_url.as_str())
        .json(&json!({"name": "Bob", "email": "bob@example.com"}))
        .send()
        .await
        .expect("create");

    let body = ctx
        .client
        .post(ctx.page("/toggle"))
        .send()
        .await
        .expect("toggle")
        .text()
        .await
        .expect("body");
    assert!(body.contains("Bob"));
    assert!(body.contains("bob@example.com"));
    assert!(body.contains("/contacts/1/edit"));
}

#[tokio::test]
async fn test_contact_without_fields_renders_blank_row() {
    let ctx = TestContext::new().await;

    ctx.client
        .post(ctx.api_url.as_str())
        .json(&json!({}))
        .send()
        .await
        .expect("create");

    let resp = ctx.client.post(ctx.page("/toggle")).send().await.expect("toggle");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(!body.contains("No contacts available."));
}
