//! Transport configuration and session credential

use std::time::Duration;

/// Default request timeout. A hanging request would otherwise leave the UI
/// in its loading state indefinitely.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the remote API, without a trailing slash
    /// (e.g., `https://api.example.com`).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Create a configuration with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Session credential, acquired once at session start and injected into the
/// transport rather than read from ambient global state.
#[derive(Clone)]
pub struct Session {
    token: String,
}

impl Session {
    /// Wrap a bearer token obtained at sign-in.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// `Authorization` header value.
    pub(crate) fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("token", &"***").finish()
    }
}
