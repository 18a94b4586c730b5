//! HTTP client for the contacts REST API.
//!
//! One method per API operation. Transport failures and unexpected statuses
//! are returned to the caller as they are; nothing is retried.

use contact_list_core::{Contact, ContactId, ContactInput};
use reqwest::{Response, StatusCode};
use thiserror::Error;
use url::Url;

/// Errors that can occur when talking to the contacts API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed or the body could not be decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered 404.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API answered with another non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Contacts API client.
#[derive(Debug, Clone)]
pub struct ContactsClient {
    client: reqwest::Client,
    base_url: String,
}

impl ContactsClient {
    /// Create a client for the collection at `base_url`
    /// (e.g. `http://localhost:5001/api/contacts`).
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(base_url: &Url) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// The collection URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: ContactId) -> String {
        format!("{}/{id}", self.base_url)
    }

    /// Fetch every contact.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API answers with an error.
    pub async fn list(&self) -> Result<Vec<Contact>, ClientError> {
        let response = self.client.get(&self.base_url).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// Create a contact and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API answers with an error.
    pub async fn create(&self, input: &ContactInput) -> Result<Contact, ClientError> {
        let response = self.client.post(&self.base_url).json(input).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// Fetch one contact.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the id is unknown.
    pub async fn get(&self, id: ContactId) -> Result<Contact, ClientError> {
        let response = self.client.get(self.item_url(id)).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// Replace a contact's name and email.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the id is unknown.
    pub async fn update(&self, id: ContactId, input: &ContactInput) -> Result<Contact, ClientError> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(input)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// Delete a contact.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the id is unknown.
    pub async fn delete(&self, id: ContactId) -> Result<(), ClientError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        check(response).await?;
        Ok(())
    }
}

/// Turn non-success responses into errors.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound(message));
    }

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let url = Url::parse("http://localhost:5001/api/contacts/").unwrap();
        let client = ContactsClient::new(&url).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5001/api/contacts");
        assert_eq!(
            client.item_url(ContactId::new(3)),
            "http://localhost:5001/api/contacts/3"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ClientError::Api {
            status: 409,
            message: "Email already exists".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 409 - Email already exists");
    }
}
