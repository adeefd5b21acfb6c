//! The router: route registration and dispatch.

use std::sync::Arc;
use log::{debug, info};

use crate::request::{AlbEvent, IncomingRequest};
use crate::router::config::RouterConfig;
use crate::router::error::Error;
use crate::router::handler::{HandlerResult, Route};
use crate::router::matcher::{PathMatcher, PathParams};
use crate::router::outcome;
use crate::router::response::ResponseEnvelope;

/// Routes requests to registered handlers.
///
/// Routes are registered up front (`route` takes `&mut self`) and are checked in registration order
/// on every dispatch. The router holds no per-request state, so one instance can serve any number
/// of requests, including from several threads at once behind an `Arc`.
#[derive(Debug, Default)]
pub struct Router {
    /// The router configuration.
    pub config: RouterConfig,
    routes: Vec<Route>,
}

impl Router {
    /// Create a router with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Create a router with the given configuration.
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            config,
            routes: Vec::new(),
        }
    }

    /// Register a handler for a path template.
    ///
    /// An empty `methods` slice accepts any method. Registering the same template twice is allowed;
    /// the earlier registration wins wherever both match.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRouteTemplate`] if the template does not compile.
    pub fn route<F>(&mut self, template: &str, methods: &[&str], handler: F) -> Result<&Route, Error>
    where
        F: Fn(&PathParams, &IncomingRequest) -> HandlerResult + Send + Sync + 'static,
    {
        let matcher = PathMatcher::compile(template)?;
        debug!("Registered route: {template} with method(s): {methods:?}");

        self.routes.push(Route::new(matcher, methods, Arc::new(handler)));
        let index = self.routes.len() - 1;
        Ok(&self.routes[index])
    }

    /// The registered routes, in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Find the first route matching both `path` and `method`.
    ///
    /// A route whose path matches but whose methods do not is skipped, not fatal: a later
    /// registration may still accept the method.
    pub fn find_route(&self, path: &str, method: &str) -> Option<(&Route, PathParams)> {
        for route in &self.routes {
            let Some(params) = route.matcher().matches(path) else {
                continue;
            };

            if route.allows_method(method) {
                debug!("Matched {method} {path} to {template}", template = route.template());
                return Some((route, params));
            }

            debug!(
                "Call method {method} does not match {template}, continuing to search.",
                template = route.template()
            );
        }
        None
    }

    /// Resolve and invoke the handler for a request.
    ///
    /// Always returns an envelope: an unmatched request yields `404 Not Found`, handler failures
    /// are translated, and handler panics are contained.
    pub fn dispatch(&self, request: IncomingRequest) -> ResponseEnvelope {
        outcome::invoke(&self.config, || self.serve(&request))
    }

    /// Decode an ALB event and dispatch it.
    ///
    /// A body that cannot be decoded is reported as `500 Server Error`.
    pub fn process_event(&self, event: AlbEvent) -> ResponseEnvelope {
        outcome::invoke(&self.config, || {
            let request = event.into_request()?;
            self.serve(&request)
        })
    }

    /// Deserialize a raw ALB event and dispatch it.
    pub fn process_alb_event(&self, event: serde_json::Value) -> ResponseEnvelope {
        outcome::invoke(&self.config, || {
            let event: AlbEvent = serde_json::from_value(event)?;
            let request = event.into_request()?;
            self.serve(&request)
        })
    }

    fn serve(&self, request: &IncomingRequest) -> HandlerResult {
        info!("Looking for route matching call: {path}({method})", path = request.path, method = request.method);
        if self.config.log_request_bodies {
            debug!("Request body: {body}", body = request.body);
        }

        let (route, params) = self
            .find_route(&request.path, &request.method)
            .ok_or_else(|| Error::RouteNotFound {
                path: request.path.clone(),
                method: request.method.clone(),
            })?;

        debug!("Executing handler for {template} with params: {params:?}", template = route.template());
        route.call(&params, request)
    }
}
