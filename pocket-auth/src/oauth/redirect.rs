//! Authorization redirect URL.

use super::REDIRECT_URL_TEMPLATE;

/// Build the Pocket authorization URL the user must visit.
///
/// `code` is the request token returned by [`fetch_token`](super::fetch_token).
/// Both values are substituted as-is; callers encode them if needed.
pub fn get_redirect_url(code: &str, redirect_uri: &str) -> String {
    render_redirect_url(REDIRECT_URL_TEMPLATE, code, redirect_uri)
}

/// Substitute the first `{code}` and then the first `{redirect}` in `template`.
pub fn render_redirect_url(template: &str, code: &str, redirect_uri: &str) -> String {
    template
        .replacen("{code}", code, 1)
        .replacen("{redirect}", redirect_uri, 1)
}
