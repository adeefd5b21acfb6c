//! Error types for routing and dispatch.

use thiserror::Error;

use crate::request::Error as RequestError;
use crate::router::failure::{FailureKind, HttpFailure};

/// Errors that can occur while registering routes or dispatching a request.
///
/// Only [`Error::InvalidRouteTemplate`] ever reaches a caller directly. Everything raised during
/// dispatch is turned into a response envelope by the outcome translator.
#[derive(Debug, Error)]
pub enum Error {
    /// A route template could not be compiled.
    #[error("Invalid route template {template:?}: {reason}")]
    InvalidRouteTemplate {
        /// The template as registered.
        template: String,
        /// What is wrong with it.
        reason: String,
    },

    /// No registration matched both the path and the method.
    #[error("Route {path} via {method} request has not been registered.")]
    RouteNotFound {
        /// The requested path.
        path: String,
        /// The requested method.
        method: String,
    },

    /// A failure signalled on purpose, usually through [`abort`](crate::abort).
    #[error("{0}")]
    Http(#[from] HttpFailure),

    /// The inbound event could not be decoded.
    #[error("{0}")]
    Request(#[from] RequestError),

    /// JSON serialization/deserialization error.
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    /// Any other error a handler wants to bubble up.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// A handler panicked.
    #[error("{0}")]
    Panic(String),
}

impl Error {
    /// Wrap an arbitrary error so a handler can return it with `?`.
    pub fn other(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Other(error.into())
    }

    /// The failure kind this error maps to, if it is one of the typed failures.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Error::RouteNotFound { .. } => Some(FailureKind::NotFound),
            Error::Http(failure) => failure.kind(),
            _ => None,
        }
    }
}
