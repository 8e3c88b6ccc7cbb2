//! Aggregate statistics types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Server-computed counts for a single provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderStats {
    /// Number of linked accounts for this provider.
    pub count: u32,
}

/// Server-computed summary over all linked accounts.
///
/// Refreshed independently of the account map itself; the two may briefly
/// disagree between refreshes, which the design tolerates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountStats {
    /// Total account count across all providers.
    #[serde(rename = "totalAccounts")]
    pub total_accounts: u32,
    /// Per-provider counts, keyed by provider tag.
    #[serde(rename = "byProvider")]
    pub by_provider: HashMap<String, ProviderStats>,
}

/// `GET /api/accounts/stats` response body.
#[derive(Debug, Deserialize)]
pub(crate) struct StatsEnvelope {
    pub stats: AccountStats,
}
