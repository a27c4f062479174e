//! REST client for the objection catalog service.

use crate::config::TuiConfig;
use riposte_core::{Objection, ObjectionId, Quote};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Idempotent seed trigger, fired once at startup. The caller ignores
    /// failures beyond logging them.
    pub async fn initialize_data(&self) -> Result<(), ApiClientError> {
        self.post_ack("/api/initialize-data").await
    }

    /// Fetch the objection collection, filtered server-side. Query params
    /// are omitted entirely when unset, matching the service contract.
    pub async fn list_objections(
        &self,
        search: Option<&str>,
        favorites_only: bool,
    ) -> Result<Vec<Objection>, ApiClientError> {
        let url = format!("{}/api/objections", self.base_url);
        let mut request = self.client.get(url);
        if let Some(term) = search {
            request = request.query(&[("search", term)]);
        }
        if favorites_only {
            request = request.query(&[("favorites_only", "true")]);
        }
        let response = request.send().await?;
        self.parse_response(response).await
    }

    pub async fn list_quotes(&self) -> Result<Vec<Quote>, ApiClientError> {
        let url = format!("{}/api/quotes", self.base_url);
        let response = self.client.get(url).send().await?;
        self.parse_response(response).await
    }

    /// Flip the server-side favorite flag. Acknowledgement only; the
    /// response body is not consumed.
    pub async fn toggle_favorite(&self, id: ObjectionId) -> Result<(), ApiClientError> {
        let path = format!("/api/objections/{}/toggle-favorite", id.as_uuid());
        self.post_ack(&path).await
    }

    /// Report that a response under this objection was copied.
    pub async fn increment_usage(&self, id: ObjectionId) -> Result<(), ApiClientError> {
        let path = format!("/api/objections/{}/increment-usage", id.as_uuid());
        self.post_ack(&path).await
    }

    async fn post_ack(&self, path: &str) -> Result<(), ApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            )))
        }
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            )))
        }
    }
}
