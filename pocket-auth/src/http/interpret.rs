//! Interpretation of Pocket response bodies.
//!
//! Pocket has no formal error contract for these endpoints: successful answers
//! are JSON objects and failures come back as plain text (e.g. `403 Forbidden`),
//! so a body is a success exactly when it starts with `{`. This module is the
//! only place that knows about that heuristic.

use serde_json::Value;

use crate::error::{malformed_response_error, provider_error, Error};

/// Interpret a raw response body.
///
/// # Returns
///
/// The parsed JSON value when the body starts with `{`, a
/// [`Provider`](crate::ErrorKind::Provider) error whose message is the body
/// verbatim otherwise, or a [`MalformedResponse`](crate::ErrorKind::MalformedResponse)
/// error when the body starts with `{` but is not valid JSON.
pub fn interpret(body: &str) -> Result<Value, Error> {
    if !body.starts_with('{') {
        return Err(provider_error(body));
    }

    serde_json::from_str(body).map_err(malformed_response_error)
}
