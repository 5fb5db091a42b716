//! Step one: obtain a request token.

use log::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Endpoints;
use crate::error::{malformed_response_error, serialization_error, Error};
use crate::http::Execute;

/// Body sent to the request token endpoint.
#[derive(Debug, Serialize)]
struct RequestTokenPayload<'a, S: ?Sized> {
    consumer_key: &'a str,
    redirect_uri: &'a str,
    state: &'a S,
}

/// Response from the request token endpoint.
///
/// Pocket returns `{"code": "...", "state": ...}`. The object is kept exactly
/// as received; the accessors are views over it and never reject a shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestTokenResponse(Map<String, Value>);

impl RequestTokenResponse {
    /// The request token, when `code` is a string.
    pub fn code(&self) -> Option<&str> {
        self.0.get("code").and_then(Value::as_str)
    }

    /// The state value echoed back by Pocket, when present.
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

impl From<Map<String, Value>> for RequestTokenResponse {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Obtain a request token from Pocket.
///
/// # Arguments
///
/// * `executor` - Transport used for the single POST
/// * `endpoints` - Where the request token endpoint lives
/// * `consumer_key` - The application's consumer key
/// * `redirect_uri` - Where Pocket sends the user after authorization
/// * `state` - Any serializable value, echoed back by Pocket
pub async fn fetch_token<E, S>(
    executor: &E,
    endpoints: &Endpoints,
    consumer_key: &str,
    redirect_uri: &str,
    state: &S,
) -> Result<RequestTokenResponse, Error>
where
    E: Execute + ?Sized,
    S: Serialize + ?Sized,
{
    let payload = serde_json::to_value(RequestTokenPayload {
        consumer_key,
        redirect_uri,
        state,
    })
    .map_err(serialization_error)?;

    debug!("Requesting Pocket request token");

    let value = executor
        .execute(&endpoints.request_token_url, payload)
        .await?;
    let response: RequestTokenResponse =
        serde_json::from_value(value).map_err(malformed_response_error)?;

    info!("Obtained Pocket request token");
    Ok(response)
}
