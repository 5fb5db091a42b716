//! Request executor: one JSON POST per call, body interpreted as text.

use std::time::Duration;

use async_trait::async_trait;
use log::*;
use serde_json::Value;

use super::interpret;
use crate::error::Error;

/// Header Pocket reads to decide the response format.
pub const X_ACCEPT: &str = "X-Accept";

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    /// User agent string.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("pocket-auth/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Executes a single provider request.
///
/// `HttpExecutor` is the production implementation. Other implementations can
/// swap the transport (a proxy, a recording client, a test double) without
/// touching the flow itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Execute: Send + Sync {
    /// POST `payload` as JSON to `url` and return the interpreted response.
    async fn execute(&self, url: &str, payload: Value) -> Result<Value, Error>;
}

/// `reqwest`-backed request executor.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: reqwest::Client,
}

impl HttpExecutor {
    /// Build an executor from the given configuration.
    pub fn new(config: &HttpClientConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Execute for HttpExecutor {
    async fn execute(&self, url: &str, payload: Value) -> Result<Value, Error> {
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(X_ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {:?}", url, e);
                Error::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            // Pocket puts its diagnostic in headers, the body is usually just the status line.
            let x_error = response
                .headers()
                .get("x-error")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let x_error_code = response
                .headers()
                .get("x-error-code")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            warn!(
                "Pocket responded {} for {} (x-error-code: {}, x-error: {})",
                status, url, x_error_code, x_error
            );
        }

        let text = response.text().await.map_err(|e| {
            warn!("Failed to read response body from {}: {:?}", url, e);
            Error::from(e)
        })?;

        interpret(&text)
    }
}
