//! Route registration, dispatch and outcome translation.
//!
//! Handlers are registered on a [`Router`] against path templates. Dispatching a request finds the
//! first registration matching both path and method, invokes its handler, and converts whatever
//! the handler produced (an envelope, a typed failure, any other error, or a panic) into a
//! [`ResponseEnvelope`].

mod matcher;
mod handler;
mod failure;
mod response;
mod outcome;
mod config;
mod error;
mod dispatch;

// Re-export public items
pub use matcher::{PathMatcher, PathParams};
pub use handler::{HandlerFn, HandlerResult, Route};
pub use failure::{FailureKind, HttpFailure, abort};
pub use response::{ResponseEnvelope, response};
pub use outcome::{invoke, translate};
pub use config::RouterConfig;
pub use error::Error;
pub use dispatch::Router;
