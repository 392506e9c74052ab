//! Travel ERP API client

pub mod auth;
pub mod enquiries;
pub mod error;
pub mod navigation;

use crate::types::WriteAck;
use error::ClientError;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Default request timeout; native targets only, browsers apply their own
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = concat!("travel-erp-client/", env!("CARGO_PKG_VERSION"));

/// Travel ERP API client
#[derive(Clone)]
pub struct ErpClient {
    client: Client,
    base_url: String,
}

impl ErpClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ErpClientBuilder {
        ErpClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create a request builder that carries the session cookie
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let request = self.client.request(method, self.url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request
    }

    /// Execute a request and decode the JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = Self::send(request).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Execute a request whose response body carries nothing of interest
    pub async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        Self::send(request).await.map(drop)
    }

    /// Execute a write whose response body may be anything from a full
    /// record to nothing; any success status counts
    pub async fn execute_write(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<WriteAck, ClientError> {
        let response = Self::send(request).await?;
        let body = response.text().await.unwrap_or_default();
        Ok(WriteAck::from_body(&body))
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let url = response.url().path().to_string();
            let body = response.text().await.unwrap_or_default();
            let error = ClientError::from_response(status, &body);
            tracing::warn!(%status, path = %url, error = %error, "API request failed");
            Err(error)
        }
    }
}

/// Builder for ErpClient
#[derive(Default)]
pub struct ErpClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ErpClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ErpClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        #[cfg_attr(target_arch = "wasm32", allow(unused_mut))]
        let mut client_builder = ClientBuilder::new()
            .user_agent(self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()));

        #[cfg(not(target_arch = "wasm32"))]
        {
            client_builder = client_builder
                .cookie_store(true)
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        let client = client_builder.build()?;

        Ok(ErpClient { client, base_url })
    }
}
