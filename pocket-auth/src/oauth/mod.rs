//! Pocket OAuth flow.
//!
//! Three steps, in caller-imposed order:
//! 1. [`fetch_token`] obtains a request token,
//! 2. [`get_redirect_url`] builds the URL the user is sent to (no network),
//! 3. [`get_access_token`] exchanges the approved request token for an access token.

mod access_token;
mod endpoints;
mod redirect;
mod request_token;

pub use access_token::{get_access_token, AccessTokenResponse};
pub use endpoints::{
    Endpoints, AUTHORIZE_URL, POCKET_BASE_URL, REDIRECT_URL_TEMPLATE, REQUEST_TOKEN_URL,
};
pub use redirect::{get_redirect_url, render_redirect_url};
pub use request_token::{fetch_token, RequestTokenResponse};
