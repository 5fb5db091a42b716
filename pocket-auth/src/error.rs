//! Error types for the `pocket-auth` crate.
//!
//! Follows the same pattern as the rest of the workspace: a root Error struct
//! holding an error kind and an optional source for error chaining.
//!
//! The `Display` output of an [`Error`] is the message of its source, unmodified.
//! A provider rejection therefore prints exactly the body Pocket sent back
//! (e.g. `403 Forbidden`) and a transport failure prints the transport's own message.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for pocket-auth crate.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Categories of errors that can occur during the Pocket auth flow.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    /// The HTTP client could not be constructed.
    Builder,
    /// The network call itself failed (DNS, refused connection, timeout, body read).
    Transport,
    /// Pocket answered with a body that is not JSON, usually a plain-text error.
    Provider,
    /// The body looked like JSON but could not be parsed into the expected response.
    MalformedResponse,
    /// The outbound payload could not be encoded as JSON.
    Serialization,
    /// A completion callback was requested outside a tokio runtime.
    Runtime,
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}", source),
            None => write!(f, "{:?}", self.error_kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Errors raised while building the reqwest::Client happen before any network call.
        let error_kind = if err.is_builder() {
            ErrorKind::Builder
        } else {
            ErrorKind::Transport
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

/// Helper function to create a provider error carrying the raw response body.
pub fn provider_error(body: &str) -> Error {
    Error {
        source: Some(body.to_string().into()),
        error_kind: ErrorKind::Provider,
    }
}

/// Helper function to create a malformed response error from a JSON parse failure.
pub fn malformed_response_error(err: serde_json::Error) -> Error {
    Error {
        source: Some(Box::new(err)),
        error_kind: ErrorKind::MalformedResponse,
    }
}

/// Helper function to create a serialization error for an outbound payload.
pub fn serialization_error(err: serde_json::Error) -> Error {
    Error {
        source: Some(Box::new(err)),
        error_kind: ErrorKind::Serialization,
    }
}

/// Helper function to create a transport error from a plain message.
///
/// Used by custom [`Execute`](crate::http::Execute) implementations whose
/// transport does not produce a `reqwest::Error`.
pub fn transport_error(message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Transport,
    }
}

/// Helper function to create a runtime error when no tokio runtime is available.
pub fn runtime_error(err: tokio::runtime::TryCurrentError) -> Error {
    Error {
        source: Some(Box::new(err)),
        error_kind: ErrorKind::Runtime,
    }
}
