//! Error types for request decoding.

use thiserror::Error;

/// Errors that can occur while turning a raw event into an [`IncomingRequest`](super::IncomingRequest).
#[derive(Debug, Error)]
pub enum Error {
    /// The body (or the event itself) is not valid JSON.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The event claimed a base64 body that could not be decoded.
    #[error("Invalid base64 body: {0}")]
    Base64Error(#[from] base64::DecodeError),

    /// The decoded body bytes are not UTF-8.
    #[error("Body is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}
