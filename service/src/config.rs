use clap::builder::TypedValueParser as _;
use clap::Parser;
use log::LevelFilter;
use std::time::Duration;

/// Default Pocket base URL used when `POCKET_BASE_URL` is not set.
pub const DEFAULT_POCKET_BASE_URL: &str = "https://getpocket.com";

/// Default redirect URI used when `REDIRECT_URI` is not set.
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000/pocket/callback";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The Pocket consumer key identifying this application.
    #[arg(short = 'k', long, env, hide_env_values = true)]
    consumer_key: Option<String>,

    /// Where Pocket sends the user after they approve (or deny) access.
    #[arg(long, env, default_value = DEFAULT_REDIRECT_URI)]
    redirect_uri: String,

    /// The base URL of the Pocket API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_POCKET_BASE_URL)]
    pocket_base_url: String,

    /// Timeout in seconds for each request to Pocket. Unset leaves the HTTP client default.
    #[arg(long, env)]
    request_timeout_secs: Option<u64>,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Config {
    /// Returns the Pocket consumer key, if configured.
    pub fn consumer_key(&self) -> Option<String> {
        self.consumer_key.clone()
    }

    /// Returns the redirect URI sent with request tokens and used in redirect URLs.
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// Returns the Pocket API base URL.
    pub fn pocket_base_url(&self) -> &str {
        &self.pocket_base_url
    }

    /// Returns the per-request timeout, if configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let config = Config::try_parse_from([
            "pocket_auth_rs",
            "--consumer-key",
            "1234-abcd",
            "--redirect-uri",
            "https://example.com/callback",
            "--pocket-base-url",
            "http://127.0.0.1:9000",
            "--request-timeout-secs",
            "15",
            "--log-level-filter",
            "DEBUG",
        ])
        .unwrap();

        assert_eq!(config.consumer_key(), Some("1234-abcd".to_string()));
        assert_eq!(config.redirect_uri(), "https://example.com/callback");
        assert_eq!(config.pocket_base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.log_level_filter, LevelFilter::Debug);
    }

    #[test]
    fn test_request_timeout_unset_by_default() {
        let config = Config::try_parse_from(["pocket_auth_rs"]).unwrap();
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let result = Config::try_parse_from(["pocket_auth_rs", "--log-level-filter", "LOUD"]);
        assert!(result.is_err());
    }
}
