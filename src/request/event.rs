//! Decoding of Application Load Balancer Lambda events.

use std::collections::HashMap;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::request::error::Error;
use crate::request::incoming::IncomingRequest;

/// The subset of an ALB target-group Lambda event the router needs.
///
/// Fields the router does not use (`requestContext` and friends) are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbEvent {
    /// The HTTP method of the call
    pub http_method: String,
    /// The URL path of the call
    pub path: String,
    /// Query string parameters, absent when the call had none
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    /// Request headers
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    /// The raw body
    #[serde(default)]
    pub body: Option<String>,
    /// Whether `body` is base64 encoded
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl AlbEvent {
    /// Convert the event into a normalized request, decoding the body.
    ///
    /// A base64 body is treated as a url-encoded form and becomes an object of strings; any other
    /// non-empty body is parsed as JSON.
    pub fn into_request(self) -> Result<IncomingRequest, Error> {
        let body = decode_body(self.body.as_deref(), self.is_base64_encoded)?;

        Ok(IncomingRequest::new(self.http_method, self.path)
            .with_headers(self.headers.unwrap_or_default())
            .with_query_params(self.query_string_parameters.unwrap_or_default())
            .with_body(body))
    }
}

fn decode_body(body: Option<&str>, is_base64_encoded: bool) -> Result<Value, Error> {
    match body {
        None | Some("") => Ok(Value::Object(Map::new())),
        Some(raw) if is_base64_encoded => {
            let bytes = STANDARD.decode(raw)?;
            let text = String::from_utf8(bytes)?;
            Ok(parse_form(&text))
        }
        Some(raw) => Ok(serde_json::from_str(raw)?),
    }
}

// First value wins for repeated keys; blank values are dropped.
fn parse_form(text: &str) -> Value {
    let mut fields = Map::new();
    for (key, value) in form_urlencoded::parse(text.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        fields
            .entry(key.into_owned())
            .or_insert_with(|| Value::String(value.into_owned()));
    }
    Value::Object(fields)
}
