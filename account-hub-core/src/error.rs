//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Network-level failure (connection refused, DNS failure, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Non-success status from the remote API
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a remote API response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Account not found in the local store
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Local validation failure (empty name, etc.)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Link initiation refused: provider is not linkable
    #[error("Provider not linkable: {0}")]
    ProviderNotLinkable(String),

    /// Link initiation refused: a link request is already outstanding
    #[error("Link request already in flight for provider: {0}")]
    LinkInFlight(String),

    /// Account removal was not confirmed by the user
    #[error("Removal not confirmed for account: {0}")]
    RemovalNotConfirmed(String),
}

impl CoreError {
    /// Whether this is expected behavior (user input, resource does not
    /// exist, declined confirmation), used for log leveling.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`. Update this method when adding variants.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound(_)
                | Self::ValidationError(_)
                | Self::ProviderNotLinkable(_)
                | Self::LinkInFlight(_)
                | Self::RemovalNotConfirmed(_)
        )
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
