//! The normalized request handed to route handlers.

use std::collections::HashMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::request::error::Error;

/// A single inbound request, already decoded from whatever wire format carried it.
///
/// A fresh value is built for every dispatch and handed to the matching handler by reference, so
/// nothing about one request can leak into the next.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingRequest {
    /// The HTTP method as sent by the caller (compared case-insensitively)
    pub method: String,
    /// The request path, without the query string
    pub path: String,
    /// The request headers
    pub headers: HashMap<String, String>,
    /// Query string parameters
    pub query_params: HashMap<String, String>,
    /// The decoded body; an empty object when the request carried none
    pub body: Value,
}

impl IncomingRequest {
    /// Create a request with no headers, no query parameters and an empty body.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: HashMap::new(),
            query_params: HashMap::new(),
            body: Value::Object(Map::new()),
        }
    }

    /// Replace the headers.
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Replace the query parameters.
    pub fn with_query_params(mut self, query_params: HashMap<String, String>) -> Self {
        self.query_params = query_params;
        self
    }

    /// Replace the decoded body.
    pub fn with_body(mut self, body: impl Into<Value>) -> Self {
        self.body = body.into();
        self
    }

    /// Get a header value.
    ///
    /// # Arguments
    ///
    /// * `name` - The header name, matched case-insensitively
    ///
    /// # Returns
    ///
    /// The header value, if it exists
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                Some(v)
            } else {
                None
            }
        })
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.get_header(name).is_some()
    }

    /// Get a query parameter value.
    pub fn get_query_param(&self, name: &str) -> Option<&String> {
        self.query_params.get(name)
    }

    /// Check if a query parameter exists.
    pub fn has_query_param(&self, name: &str) -> bool {
        self.query_params.contains_key(name)
    }

    /// Deserialize the decoded body into a typed value.
    ///
    /// # Returns
    ///
    /// The typed body, or an error if the body does not have the expected shape
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let value = T::deserialize(&self.body)?;
        Ok(value)
    }
}
