use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use log::{error, info};
use pocket_auth::error::serialization_error;
use pocket_auth::oauth::render_redirect_url;
use pocket_auth::{Client, Endpoints, Error};
use serde::Serialize;
use serde_json::Value;
use service::{config::Config, logging::Logger};
use std::fmt;

/// Walk through Pocket's authentication flow from the command line.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Obtain a request token from Pocket
    RequestToken {
        /// Value echoed back by Pocket. Parsed as JSON when possible, sent as a string otherwise.
        #[arg(long)]
        state: Option<String>,
    },
    /// Print the URL the user must visit to approve a request token
    RedirectUrl {
        /// Request token returned by `request-token`
        request_token: String,
    },
    /// Exchange an approved request token for an access token
    AccessToken {
        /// Request token the user approved
        request_token: String,
    },
}

/// Failures that end the command.
#[derive(Debug)]
enum CliError {
    /// A network command was run without a consumer key.
    MissingConsumerKey,
    Pocket(Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::MissingConsumerKey => {
                write!(f, "No consumer key provided, set --consumer-key or CONSUMER_KEY")
            }
            CliError::Pocket(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl From<Error> for CliError {
    fn from(err: Error) -> Self {
        CliError::Pocket(err)
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = Logger::init_logger(&cli.config) {
        eprintln!("Failed to start logger: {e}");
    }

    if let Err(e) = run(cli).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.config;

    match cli.command {
        Command::RedirectUrl { request_token } => {
            let endpoints = Endpoints::with_base_url(config.pocket_base_url());
            println!(
                "{}",
                render_redirect_url(
                    &endpoints.redirect_url_template,
                    &request_token,
                    config.redirect_uri()
                )
            );
        }
        Command::RequestToken { state } => {
            let client = build_client(&config)?;
            let state = parse_state(state);
            info!("Requesting token for redirect URI {}", config.redirect_uri());

            let response = client.fetch_token(config.redirect_uri(), &state).await?;
            print_json(&response)?;
        }
        Command::AccessToken { request_token } => {
            let client = build_client(&config)?;

            let response = client.get_access_token(&request_token).await?;
            if let Some(username) = response.username() {
                info!("Access granted by Pocket user {}", username);
            }
            print_json(&response)?;
        }
    }

    Ok(())
}

fn build_client(config: &Config) -> Result<Client, CliError> {
    let consumer_key = config
        .consumer_key()
        .ok_or(CliError::MissingConsumerKey)?;

    let mut builder = Client::builder().with_base_url(config.pocket_base_url());
    if let Some(timeout) = config.request_timeout() {
        builder = builder.with_timeout(timeout);
    }
    Ok(builder.build(consumer_key)?)
}

/// Interpret a `--state` argument: JSON when it parses, a plain string otherwise.
fn parse_state(state: Option<String>) -> Value {
    match state {
        Some(raw) => serde_json::from_str(&raw).unwrap_or(Value::String(raw)),
        None => Value::Null,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(value).map_err(serialization_error)?;
    println!("{json}");
    Ok(())
}
