//! Linked account types

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A third-party account linked to the application.
///
/// `email` and `connected_at` are provider-reported and immutable after
/// linking; `name` is the user-editable display label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Opaque identifier, stable across the account's lifetime.
    pub id: String,
    /// Server-reported provider tag (e.g., `"google"`).
    pub provider: String,
    /// User-editable display label.
    pub name: String,
    /// Provider-reported identity string.
    pub email: String,
    /// Whether this is the primary account. At most one account across the
    /// whole store carries this flag; the server enforces it.
    #[serde(rename = "isPrimary")]
    pub is_primary: bool,
    /// When the link completed.
    #[serde(rename = "connectedAt")]
    pub connected_at: DateTime<Utc>,
}

/// All linked accounts, keyed by provider tag.
///
/// Per-provider order is the server-reported order and is never re-sorted
/// locally. Keys are present only for providers with at least one account.
pub type AccountMap = HashMap<String, Vec<Account>>;

/// Default display label used when the user supplies no name at link time.
#[must_use]
pub fn default_account_name(provider_tag: &str) -> String {
    format!("{provider_tag} Account")
}

/// Result of a successful link initiation: the external authorization URL
/// the user agent must navigate to. Completing the link happens out-of-band;
/// the new account becomes visible only after the next accounts refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkHandoff {
    /// Authorization URL to hand the user agent to.
    #[serde(rename = "authUrl")]
    pub auth_url: String,
}

// ===== Wire envelopes =====

/// `GET /api/accounts` response body.
#[derive(Debug, Deserialize)]
pub(crate) struct AccountsEnvelope {
    pub accounts: AccountMap,
}

/// Link initiation request body.
#[derive(Debug, Serialize)]
pub(crate) struct BeginLinkBody<'a> {
    #[serde(rename = "accountName")]
    pub account_name: &'a str,
}

/// Rename request body.
#[derive(Debug, Serialize)]
pub(crate) struct RenameBody<'a> {
    pub name: &'a str,
}
