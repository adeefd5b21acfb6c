//! The response envelope returned from every dispatch.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::router::error::Error;

/// A response in the shape the load balancer expects.
///
/// The body is kept as a JSON value and is not serialized again here; turning the whole envelope
/// into the Lambda reply is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// The HTTP status code
    pub status_code: u16,
    /// The status description, e.g. `"200 OK"`
    pub status_description: String,
    /// Whether `body` holds base64 encoded data
    pub is_base64_encoded: bool,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The response body
    pub body: Value,
}

impl ResponseEnvelope {
    /// Create a `200 OK` JSON response with the given body.
    pub fn new(body: impl Into<Value>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            status_code: 200,
            status_description: "200 OK".to_string(),
            is_base64_encoded: false,
            headers,
            body: body.into(),
        }
    }

    /// Create a response whose body is `value` serialized to JSON.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, Error> {
        let body = serde_json::to_value(value)?;
        Ok(Self::new(body))
    }

    /// Set the status code and description.
    pub fn with_status(mut self, code: u16, description: impl Into<String>) -> Self {
        self.status_code = code;
        self.status_description = description.into();
        self
    }

    /// Add or replace a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Merge headers into the response, replacing existing ones with the same name.
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Set the content type.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// Mark the body as base64 encoded (or not).
    pub fn with_base64_encoded(mut self, is_base64_encoded: bool) -> Self {
        self.is_base64_encoded = is_base64_encoded;
        self
    }
}

/// Build a success envelope: `200 OK`, not base64 encoded, `Content-Type: application/json`.
///
/// Use the `with_*` builders on the result to override any of the defaults.
pub fn response(body: impl Into<Value>) -> ResponseEnvelope {
    ResponseEnvelope::new(body)
}
