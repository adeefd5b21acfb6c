//! Normalized request types.
//!
//! The router core only ever sees an [`IncomingRequest`]. The [`AlbEvent`] adapter turns a raw
//! Application Load Balancer Lambda event into one, decoding the body on the way.

mod incoming;
mod event;
mod error;
mod tests;

// Re-export public items
pub use incoming::IncomingRequest;
pub use event::AlbEvent;
pub use error::Error;
