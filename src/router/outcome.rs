//! Conversion of handler outcomes into response envelopes.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use log::error;
use serde_json::Value;

use crate::router::config::RouterConfig;
use crate::router::error::Error;
use crate::router::response::ResponseEnvelope;

/// Run `thunk` and turn whatever it produces into an envelope.
///
/// A returned envelope passes through unchanged. Errors are handed to [`translate`], and a panic is
/// caught and reported as an unhandled error, so this never fails and never unwinds.
pub fn invoke<F>(config: &RouterConfig, thunk: F) -> ResponseEnvelope
where
    F: FnOnce() -> Result<ResponseEnvelope, Error>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(thunk))
        .unwrap_or_else(|payload| Err(Error::Panic(panic_message(payload.as_ref()))));

    match outcome {
        Ok(response) => response,
        Err(e) => translate(e, config),
    }
}

/// Turn an error into an envelope.
///
/// Typed failures keep their status code and description. Anything else, including a generic
/// failure raised with an unrecognized code, becomes `500 Server Error`. The body is always the
/// error's message as plain text.
pub fn translate(error: Error, config: &RouterConfig) -> ResponseEnvelope {
    let message = error.to_string();

    let (code, description) = match error.failure_kind() {
        Some(kind) => {
            error!("Coded error ({kind}): {message}");
            (kind.code(), kind.description())
        }
        None => {
            error!("Error: {message}");
            (500, "Server Error")
        }
    };

    ResponseEnvelope::new(Value::String(message))
        .with_status(code, description)
        .with_content_type(config.failure_content_type.as_str())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    }
}
