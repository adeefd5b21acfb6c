//! Route handlers and registrations.

use std::fmt;
use std::sync::Arc;

use crate::request::IncomingRequest;
use crate::router::error::Error;
use crate::router::matcher::{PathMatcher, PathParams};
use crate::router::response::ResponseEnvelope;

/// What a handler returns.
pub type HandlerResult = Result<ResponseEnvelope, Error>;

/// Type alias for a handler function. Every handler receives the extracted path parameters and the
/// full request; handlers that do not need the request simply ignore it.
pub type HandlerFn = Arc<dyn Fn(&PathParams, &IncomingRequest) -> HandlerResult + Send + Sync>;

/// A registered route: a compiled template, the methods it accepts and its handler.
pub struct Route {
    matcher: PathMatcher,
    /// Upper-cased; empty means any method.
    methods: Vec<String>,
    handler: HandlerFn,
}

impl Route {
    pub(crate) fn new(matcher: PathMatcher, methods: &[&str], handler: HandlerFn) -> Self {
        Self {
            matcher,
            methods: methods.iter().map(|m| m.to_ascii_uppercase()).collect(),
            handler,
        }
    }

    /// The template the route was registered with.
    pub fn template(&self) -> &str {
        self.matcher.template()
    }

    /// The accepted methods, upper-cased. Empty means any method is accepted.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// The compiled matcher.
    pub fn matcher(&self) -> &PathMatcher {
        &self.matcher
    }

    /// Whether this route accepts `method` (case-insensitive).
    pub fn allows_method(&self, method: &str) -> bool {
        self.methods.is_empty() || self.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
    }

    pub(crate) fn call(&self, params: &PathParams, request: &IncomingRequest) -> HandlerResult {
        (self.handler)(params, request)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("template", &self.template())
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}
