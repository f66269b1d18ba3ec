//! Async client for the lockrelay HTTP routes.

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use lockrelay_core::{CoreError, StatusLabel};

/// Errors from talking to a lockrelay server.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// `/get-status` returned something other than a status index.
    #[error("unexpected status body '{body}': {source}")]
    InvalidBody {
        body: String,
        #[source]
        source: CoreError,
    },
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Client bound to one server base URL, e.g. `http://127.0.0.1:8000`.
#[derive(Debug, Clone)]
pub struct StatusClient {
    http: reqwest::Client,
    base_url: String,
}

impl StatusClient {
    pub fn new(base_url: &str) -> Self {
        StatusClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the `/get-status` body exactly as served.
    pub async fn fetch_raw(&self) -> Result<String, ClientError> {
        let url = self.url("/get-status");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.clone(),
                source,
            })?;
        let response = check_status(response).await?;
        response
            .text()
            .await
            .map_err(|source| ClientError::Request { url, source })
    }

    /// Fetches and decodes the current status.
    pub async fn fetch(&self) -> Result<StatusLabel, ClientError> {
        let body = self.fetch_raw().await?;
        body.parse()
            .map_err(|source| ClientError::InvalidBody { body, source })
    }

    /// Requests `status` through the admin form.
    pub async fn set(&self, status: StatusLabel) -> Result<(), ClientError> {
        let index = status.index().to_string();
        self.post_admin(format!("state={index}")).await
    }

    /// Submits the admin form without a `state` field, resetting to `None`.
    pub async fn reset(&self) -> Result<(), ClientError> {
        self.post_admin(String::new()).await
    }

    /// Fetches the status and returns it when it differs from `last`.
    ///
    /// The first successful poll (`last == None`) always reports.
    pub async fn poll_change(
        &self,
        last: Option<StatusLabel>,
    ) -> Result<Option<StatusLabel>, ClientError> {
        let current = self.fetch().await?;
        Ok((last != Some(current)).then_some(current))
    }

    async fn post_admin(&self, body: String) -> Result<(), ClientError> {
        let url = self.url("/admin");
        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|source| ClientError::Request { url, source })?;
        check_status(response).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turns a non-success response into [`ClientError::Server`], preferring the
/// server's JSON error message over the raw body.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Server {
        status: status.as_u16(),
        message: server_message(body),
    })
}

fn server_message(body: String) -> String {
    serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|envelope| envelope.error.message)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = StatusClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/get-status"), "http://localhost:8000/get-status");
    }

    #[test]
    fn server_message_prefers_error_envelope() {
        let body = r#"{"success":false,"error":{"code":"BAD_REQUEST","message":"invalid status value 'abc'"}}"#;
        assert_eq!(server_message(body.to_string()), "invalid status value 'abc'");
        assert_eq!(server_message("Not Found".to_string()), "Not Found");
    }
}
