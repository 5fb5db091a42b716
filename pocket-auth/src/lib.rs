//! # pocket-auth
//!
//! Client for Pocket's OAuth-style authentication flow:
//! - obtain a request token ([`Client::fetch_token`])
//! - build the authorization redirect URL ([`Client::get_redirect_url`])
//! - exchange the approved request token for an access token ([`Client::get_access_token`])
//!
//! Each network operation is one POST with a JSON body. Nothing is stored,
//! refreshed or retried.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pocket_auth::Client;
//!
//! let client = Client::new("1234-abcd1234abcd1234abcd1234")?;
//! let request = client.fetch_token("https://example.com/callback", "csrf-state").await?;
//! let code = request.code().unwrap_or_default().to_string();
//! let url = client.get_redirect_url(&code, "https://example.com/callback");
//! // ... send the user to `url`, wait for the callback ...
//! let access = client.get_access_token(&code).await?;
//! ```

pub mod callback;
pub mod client;
pub mod error;
pub mod http;
pub mod oauth;

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use error::{Error, ErrorKind};
pub use oauth::{get_redirect_url, AccessTokenResponse, Endpoints, RequestTokenResponse};
