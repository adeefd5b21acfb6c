//! The closed set of failures a handler can signal on purpose.

use std::fmt;

use crate::router::error::Error;

/// The recognized failure kinds and their status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    Conflict = 409,
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
}

impl FailureKind {
    /// Every recognized kind, in status code order.
    pub const ALL: [FailureKind; 8] = [
        FailureKind::BadRequest,
        FailureKind::Unauthorized,
        FailureKind::Forbidden,
        FailureKind::NotFound,
        FailureKind::Conflict,
        FailureKind::InternalServerError,
        FailureKind::NotImplemented,
        FailureKind::BadGateway,
    ];

    /// Look up the kind for a status code.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            400 => Some(FailureKind::BadRequest),
            401 => Some(FailureKind::Unauthorized),
            403 => Some(FailureKind::Forbidden),
            404 => Some(FailureKind::NotFound),
            409 => Some(FailureKind::Conflict),
            500 => Some(FailureKind::InternalServerError),
            501 => Some(FailureKind::NotImplemented),
            502 => Some(FailureKind::BadGateway),
            _ => None,
        }
    }

    /// The numeric status code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Get the reason phrase for this status code.
    pub fn reason_phrase(self) -> &'static str {
        match self {
            FailureKind::BadRequest => "Bad Request",
            FailureKind::Unauthorized => "Unauthorized",
            FailureKind::Forbidden => "Forbidden",
            FailureKind::NotFound => "Not Found",
            FailureKind::Conflict => "Conflict",
            FailureKind::InternalServerError => "Internal Server Error",
            FailureKind::NotImplemented => "Not Implemented",
            FailureKind::BadGateway => "Bad Gateway",
        }
    }

    /// The status description used in envelopes, e.g. `"403 Forbidden"`.
    pub fn description(self) -> &'static str {
        match self {
            FailureKind::BadRequest => "400 Bad Request",
            FailureKind::Unauthorized => "401 Unauthorized",
            FailureKind::Forbidden => "403 Forbidden",
            FailureKind::NotFound => "404 Not Found",
            FailureKind::Conflict => "409 Conflict",
            FailureKind::InternalServerError => "500 Internal Server Error",
            FailureKind::NotImplemented => "501 Not Implemented",
            FailureKind::BadGateway => "502 Bad Gateway",
        }
    }

    /// Build a failure of this kind.
    pub fn with_message(self, message: impl Into<String>) -> HttpFailure {
        HttpFailure::new(self, message)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A failure carrying a human readable message.
///
/// A failure without a kind is the generic case produced by [`abort`] for an unknown code. It is
/// still a failure, but it translates like any unstructured error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HttpFailure {
    kind: Option<FailureKind>,
    message: String,
}

impl HttpFailure {
    /// Create a failure of a recognized kind.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            message: message.into(),
        }
    }

    /// Create a failure with no recognized status code.
    pub fn generic(message: impl Into<String>) -> Self {
        Self {
            kind: None,
            message: message.into(),
        }
    }

    /// The kind of this failure, `None` for a generic failure.
    pub fn kind(&self) -> Option<FailureKind> {
        self.kind
    }

    /// The status code of this failure, `None` for a generic failure.
    pub fn code(&self) -> Option<u16> {
        self.kind.map(FailureKind::code)
    }

    /// The message given when the failure was raised.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Fail with the failure matching `code`.
///
/// Always returns `Err`, so handlers can write `return abort(400, "Missing 'data'");`. An
/// unrecognized code yields a generic failure, which is reported as a 500 rather than as `code`.
///
/// ```
/// use alb_router::{abort, Error};
///
/// let result: Result<(), Error> = abort(403, "nope");
/// let error = result.unwrap_err();
/// assert_eq!(error.failure_kind().map(|kind| kind.code()), Some(403));
/// assert_eq!(error.to_string(), "nope");
/// ```
pub fn abort<T>(code: u16, message: impl Into<String>) -> Result<T, Error> {
    let failure = match FailureKind::from_code(code) {
        Some(kind) => HttpFailure::new(kind, message),
        None => HttpFailure::generic(message),
    };
    Err(Error::Http(failure))
}
