//! Storefront service client
//!
//! Thin reqwest wrapper around the two endpoints the GUI talks to. One
//! `reqwest::Client` is shared so connections are pooled.

use crate::api::models::{ChatRequest, ChatResponse, SearchResponse};
use crate::catalog::Product;
use crate::chat::Message;
use crate::config::HttpConfig;
use crate::error::ClientError;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for `/api/search` and `/api/chat`
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl ApiClient {
    /// Build a client from configuration
    ///
    /// # Errors
    /// Returns `ClientError::Network` if the TLS backend cannot be initialised.
    pub fn new(config: &HttpConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.request_timeout_secs,
        })
    }

    /// Client pointed at another origin (used against mock servers)
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        Self::new(&HttpConfig {
            base_url: base_url.to_string(),
            request_timeout_secs: timeout_secs,
        })
    }

    /// Origin every request is sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search the catalog
    ///
    /// An empty query asks the service for its default listing.
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, ClientError> {
        let url = format!("{}/api/search", self.base_url);
        tracing::debug!(url = %url, query = %query, "Searching products");

        let response = self
            .http
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.timeout_secs))?;

        let body: SearchResponse = self.read_json(response).await?;
        tracing::debug!(hits = body.hits.len(), "Search completed");
        Ok(body.hits)
    }

    /// Post the whole transcript and get the assistant's reply
    pub async fn chat(&self, conversation: &[Message]) -> Result<ChatResponse, ClientError> {
        let url = format!("{}/api/chat", self.base_url);
        tracing::debug!(url = %url, turns = conversation.len(), "Sending chat transcript");

        let response = self
            .http
            .post(&url)
            .json(&ChatRequest { conversation })
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.timeout_secs))?;

        let reply: ChatResponse = self.read_json(response).await?;
        tracing::debug!(
            has_directive = reply.directive().is_some(),
            "Chat reply received"
        );
        Ok(reply)
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::from_transport(e, self.timeout_secs))?;

        if !status.is_success() {
            tracing::error!(
                status_code = status.as_u16(),
                error_body = %body,
                "Storefront service returned error status"
            );
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            ClientError::MalformedResponse(format!("{} - Response body: {}", e, body))
        })
    }
}
