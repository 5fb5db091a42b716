//! Pocket endpoint configuration.

/// Default Pocket host.
pub const POCKET_BASE_URL: &str = "https://getpocket.com";

/// Endpoint returning a request token.
pub const REQUEST_TOKEN_URL: &str = "https://getpocket.com/v3/oauth/request";

/// Endpoint exchanging an approved request token for an access token.
pub const AUTHORIZE_URL: &str = "https://getpocket.com/v3/oauth/authorize";

/// Page the user is redirected to. `{code}` and `{redirect}` are replaced literally.
pub const REDIRECT_URL_TEMPLATE: &str =
    "https://getpocket.com/auth/authorize?request_token={code}&redirect_uri={redirect}";

/// The set of provider URLs a client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Request token endpoint.
    pub request_token_url: String,
    /// Access token (authorize) endpoint.
    pub authorize_url: String,
    /// Redirect URL template with `{code}` and `{redirect}` placeholders.
    pub redirect_url_template: String,
}

impl Endpoints {
    /// Build the endpoint set for a different host, keeping Pocket's paths.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Scheme and host, e.g. `http://127.0.0.1:1234`. A trailing slash is ignored.
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            request_token_url: format!("{}/v3/oauth/request", base_url),
            authorize_url: format!("{}/v3/oauth/authorize", base_url),
            redirect_url_template: format!(
                "{}/auth/authorize?request_token={{code}}&redirect_uri={{redirect}}",
                base_url
            ),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            request_token_url: REQUEST_TOKEN_URL.to_string(),
            authorize_url: AUTHORIZE_URL.to_string(),
            redirect_url_template: REDIRECT_URL_TEMPLATE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.request_token_url,
            "https://getpocket.com/v3/oauth/request"
        );
        assert_eq!(
            endpoints.authorize_url,
            "https://getpocket.com/v3/oauth/authorize"
        );
        assert_eq!(endpoints.redirect_url_template, REDIRECT_URL_TEMPLATE);
    }

    #[test]
    fn test_pocket_base_url_matches_defaults() {
        assert_eq!(Endpoints::with_base_url(POCKET_BASE_URL), Endpoints::default());
    }

    #[test]
    fn test_with_base_url_ignores_trailing_slash() {
        let endpoints = Endpoints::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(
            endpoints.request_token_url,
            "http://127.0.0.1:8080/v3/oauth/request"
        );
        assert_eq!(
            endpoints.authorize_url,
            "http://127.0.0.1:8080/v3/oauth/authorize"
        );
        assert_eq!(
            endpoints.redirect_url_template,
            "http://127.0.0.1:8080/auth/authorize?request_token={code}&redirect_uri={redirect}"
        );
    }
}
