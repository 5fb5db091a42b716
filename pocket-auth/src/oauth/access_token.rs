//! Step three: exchange an approved request token for an access token.

use log::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Endpoints;
use crate::error::{malformed_response_error, serialization_error, Error};
use crate::http::Execute;

/// Body sent to the authorize endpoint.
#[derive(Debug, Serialize)]
struct AccessTokenPayload<'a> {
    consumer_key: &'a str,
    code: &'a str,
}

/// Response from the authorize endpoint.
///
/// Pocket returns `{"access_token": "...", "username": "..."}`, plus `state`
/// when one was supplied. The object is kept exactly as received; the
/// accessors are views over it and never reject a shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessTokenResponse(Map<String, Value>);

impl AccessTokenResponse {
    /// The access token, when `access_token` is a string.
    pub fn access_token(&self) -> Option<&str> {
        self.0.get("access_token").and_then(Value::as_str)
    }

    /// The Pocket username that granted access, when `username` is a string.
    pub fn username(&self) -> Option<&str> {
        self.0.get("username").and_then(Value::as_str)
    }

    pub fn state(&self) -> Option<&Value> {
        self.0.get("state")
    }

    /// Any key of the response.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for AccessTokenResponse {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Exchange an approved request token for an access token.
///
/// # Arguments
///
/// * `executor` - Transport used for the single POST
/// * `endpoints` - Where the authorize endpoint lives
/// * `consumer_key` - The application's consumer key
/// * `code` - The request token the user approved
pub async fn get_access_token<E>(
    executor: &E,
    endpoints: &Endpoints,
    consumer_key: &str,
    code: &str,
) -> Result<AccessTokenResponse, Error>
where
    E: Execute + ?Sized,
{
    let payload = serde_json::to_value(AccessTokenPayload { consumer_key, code })
        .map_err(serialization_error)?;

    debug!("Exchanging Pocket request token for access token");

    let value = executor.execute(&endpoints.authorize_url, payload).await?;
    let response: AccessTokenResponse =
        serde_json::from_value(value).map_err(malformed_response_error)?;

    info!("Obtained Pocket access token");
    Ok(response)
}
