//! Router configuration.

/// Router configuration.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// The Content-Type of envelopes produced from failures.
    pub failure_content_type: String,
    /// Whether request bodies are included in debug logs.
    pub log_request_bodies: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            failure_content_type: "text/plain".to_string(),
            log_request_bodies: false,
        }
    }
}
