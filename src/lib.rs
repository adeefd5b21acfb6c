//! Flask-style request routing for AWS Application Load Balancer events.
//!
//! This library maps an incoming request (method, path, headers, query parameters and a decoded
//! body) to a handler registered against a path template, and turns whatever the handler produced
//! into a uniform response envelope.
//!
//! # Features
//!
//! - Path templates with named placeholders, e.g. `/hello/<user>`
//! - Per-route method restrictions, checked case-insensitively
//! - First-registered-wins dispatch, with method mismatches falling through to later routes
//! - A fixed failure taxonomy (`400`, `401`, `403`, `404`, `409`, `500`, `501`, `502`) and an
//!   [`abort`] helper for raising failures from handlers
//! - Every dispatch returns an envelope: unmatched requests, handler errors and handler panics all
//!   become responses
//! - Decoding of raw ALB Lambda events, including base64 form bodies
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use alb_router::{response, IncomingRequest, Router};
//!
//! let mut router = Router::new();
//! router
//!     .route("/hello/<user>", &["GET"], |params, _request| {
//!         Ok(response(format!("Hello {}!", params["user"])))
//!     })
//!     .unwrap();
//!
//! let result = router.dispatch(IncomingRequest::new("GET", "/hello/bob"));
//! assert_eq!(result.status_code, 200);
//! assert_eq!(result.body, "Hello bob!");
//! ```
//!
//! ## Error handling
//!
//! ```
//! use alb_router::{abort, IncomingRequest, Router};
//!
//! let mut router = Router::new();
//! router.route("/admin", &[], |_params, _request| abort(403, "nope")).unwrap();
//!
//! let forbidden = router.dispatch(IncomingRequest::new("GET", "/admin"));
//! assert_eq!(forbidden.status_code, 403);
//! assert_eq!(forbidden.status_description, "403 Forbidden");
//! assert_eq!(forbidden.body, "nope");
//!
//! let missing = router.dispatch(IncomingRequest::new("GET", "/nowhere"));
//! assert_eq!(missing.status_code, 404);
//! ```
//!
//! ## ALB events
//!
//! ```
//! use alb_router::{response, Router};
//! use serde_json::json;
//!
//! let mut router = Router::new();
//! router
//!     .route("/update/<user>", &["POST"], |params, request| {
//!         Ok(response(json!({
//!             "message": format!("Updated {}!", params["user"]),
//!             "first_name": request.body["first_name"].clone(),
//!         })))
//!     })
//!     .unwrap();
//!
//! let event = json!({
//!     "httpMethod": "POST",
//!     "path": "/update/user",
//!     "queryStringParameters": {},
//!     "headers": {"content-type": "application/json"},
//!     "body": "{\"first_name\": \"Bob\"}",
//!     "isBase64Encoded": false
//! });
//!
//! let result = router.process_alb_event(event);
//! assert_eq!(result.body["message"], "Updated user!");
//! assert_eq!(result.body["first_name"], "Bob");
//! ```
//!
//! See the `demos` directory for a complete Lambda-style handler.

// Export the request module
pub mod request;

// Export the router module
pub mod router;

// Re-export commonly used items for convenience
pub use request::{AlbEvent, Error as RequestError, IncomingRequest};
pub use router::{
    Error, FailureKind, HttpFailure, PathMatcher, PathParams, ResponseEnvelope, Route, Router, RouterConfig, abort,
    response,
};
