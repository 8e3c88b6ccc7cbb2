//! HTTP transport for the remote accounts API

mod config;
mod http;

pub use config::{ApiConfig, Session};
pub use http::HttpAccountsApi;

/// Maximum response-body length included in debug logs.
const MAX_LOG_BODY: usize = 500;

/// Truncate a response body for logging.
pub(crate) fn truncate_for_log(body: &str) -> String {
    if body.len() <= MAX_LOG_BODY {
        body.to_string()
    } else {
        let mut end = MAX_LOG_BODY;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... ({} bytes total)", &body[..end], body.len())
    }
}
