//! Pocket auth client.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::callback::spawn_with_callback;
use crate::error::Error;
use crate::http::{Execute, HttpClientConfig, HttpExecutor};
use crate::oauth::{self, AccessTokenResponse, Endpoints, RequestTokenResponse};

/// Client for Pocket's authentication flow.
///
/// Holds the application's consumer key, the endpoint set and the transport.
/// Holds no per-flow state: request tokens, state values and access tokens
/// stay with the caller. Cloning is cheap and clones share the transport.
pub struct Client<E = HttpExecutor> {
    consumer_key: SecretString,
    endpoints: Endpoints,
    executor: Arc<E>,
}

impl Client<HttpExecutor> {
    /// Create a client talking to getpocket.com with default HTTP settings.
    pub fn new(consumer_key: impl Into<String>) -> Result<Self, Error> {
        ClientBuilder::new().build(consumer_key)
    }

    /// Create a client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<E: Execute> Client<E> {
    /// Create a client over a custom transport.
    pub fn with_executor(consumer_key: impl Into<String>, endpoints: Endpoints, executor: E) -> Self {
        Self {
            consumer_key: SecretString::new(consumer_key.into()),
            endpoints,
            executor: Arc::new(executor),
        }
    }

    /// The endpoints this client talks to.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Obtain a request token.
    ///
    /// # Arguments
    ///
    /// * `redirect_uri` - Where Pocket sends the user after authorization
    /// * `state` - Any serializable value, echoed back by Pocket
    pub async fn fetch_token<S>(
        &self,
        redirect_uri: &str,
        state: &S,
    ) -> Result<RequestTokenResponse, Error>
    where
        S: Serialize + ?Sized,
    {
        oauth::fetch_token(
            self.executor.as_ref(),
            &self.endpoints,
            self.consumer_key.expose_secret(),
            redirect_uri,
            state,
        )
        .await
    }

    /// Build the authorization URL for a request token. Performs no I/O.
    pub fn get_redirect_url(&self, code: &str, redirect_uri: &str) -> String {
        oauth::render_redirect_url(&self.endpoints.redirect_url_template, code, redirect_uri)
    }

    /// Exchange an approved request token for an access token.
    pub async fn get_access_token(&self, code: &str) -> Result<AccessTokenResponse, Error> {
        oauth::get_access_token(
            self.executor.as_ref(),
            &self.endpoints,
            self.consumer_key.expose_secret(),
            code,
        )
        .await
    }
}

impl<E: Execute + 'static> Client<E> {
    /// Callback flavour of [`fetch_token`](Self::fetch_token).
    ///
    /// `callback` runs exactly once. See [`spawn_with_callback`] for the
    /// returned handle.
    pub fn fetch_token_with_callback<S, C>(
        &self,
        redirect_uri: impl Into<String>,
        state: S,
        callback: C,
    ) -> Option<JoinHandle<()>>
    where
        S: Serialize + Send + Sync + 'static,
        C: FnOnce(Option<Error>, Option<RequestTokenResponse>) + Send + 'static,
    {
        let client = self.clone();
        let redirect_uri = redirect_uri.into();
        spawn_with_callback(
            async move { client.fetch_token(&redirect_uri, &state).await },
            callback,
        )
    }

    /// Callback flavour of [`get_access_token`](Self::get_access_token).
    ///
    /// `callback` runs exactly once. See [`spawn_with_callback`] for the
    /// returned handle.
    pub fn get_access_token_with_callback<C>(
        &self,
        code: impl Into<String>,
        callback: C,
    ) -> Option<JoinHandle<()>>
    where
        C: FnOnce(Option<Error>, Option<AccessTokenResponse>) + Send + 'static,
    {
        let client = self.clone();
        let code = code.into();
        spawn_with_callback(
            async move { client.get_access_token(&code).await },
            callback,
        )
    }
}

impl<E> Clone for Client<E> {
    fn clone(&self) -> Self {
        Self {
            consumer_key: self.consumer_key.clone(),
            endpoints: self.endpoints.clone(),
            executor: Arc::clone(&self.executor),
        }
    }
}

impl<E> fmt::Debug for Client<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("consumer_key", &"[REDACTED]")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

/// Builder for a [`Client`] over the default HTTP transport.
pub struct ClientBuilder {
    config: HttpClientConfig,
    endpoints: Endpoints,
}

impl ClientBuilder {
    /// Create a new client builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: HttpClientConfig::default(),
            endpoints: Endpoints::default(),
        }
    }

    /// Set the full endpoint set.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Point the client at another host, keeping Pocket's paths.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.endpoints = Endpoints::with_base_url(base_url);
        self
    }

    /// Set the request timeout. Without one the transport default applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.config.user_agent = user_agent;
        self
    }

    /// Build the configured client.
    pub fn build(self, consumer_key: impl Into<String>) -> Result<Client, Error> {
        let executor = HttpExecutor::new(&self.config)?;
        Ok(Client::with_executor(consumer_key, self.endpoints, executor))
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
