//! Locally-cached view of linked accounts and statistics.
//!
//! The store is a published snapshot, replaced wholesale by the sync engine
//! on every successful fetch. Nothing patches it in place: any operation
//! that changes server state triggers a full re-fetch instead, trading a
//! little UI latency for freedom from local/remote drift.

use tokio::sync::watch;

use crate::types::{Account, AccountMap, AccountStats};

/// One immutable view of the account world.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    /// All linked accounts, keyed by provider tag, in server order.
    pub accounts: AccountMap,
    /// Aggregate statistics from the last successful stats refresh, if any.
    /// Comes from a separate fetch and may briefly lag `accounts`.
    pub stats: Option<AccountStats>,
    /// Whether at least one accounts refresh has completed successfully.
    /// The UI shows its loading state until this flips.
    pub accounts_loaded: bool,
    /// Whether the most recent accounts refresh failed. Previously loaded
    /// data is retained alongside this signal.
    pub load_failed: bool,
}

impl StoreSnapshot {
    /// Look up an account by id across all providers.
    #[must_use]
    pub fn find_account(&self, account_id: &str) -> Option<&Account> {
        self.accounts
            .values()
            .flat_map(|accounts| accounts.iter())
            .find(|a| a.id == account_id)
    }

    /// The single primary account, if one is designated.
    #[must_use]
    pub fn primary_account(&self) -> Option<&Account> {
        self.accounts
            .values()
            .flat_map(|accounts| accounts.iter())
            .find(|a| a.is_primary)
    }

    /// Total number of linked accounts in the map (not the stats fetch).
    #[must_use]
    pub fn total_accounts(&self) -> usize {
        self.accounts.values().map(Vec::len).sum()
    }
}

/// Shared account store.
///
/// Readers take point-in-time copies via [`snapshot`](Self::snapshot) or
/// observe changes via [`subscribe`](Self::subscribe). Only the sync engine
/// writes, and only by wholesale replacement.
pub struct AccountStore {
    tx: watch::Sender<StoreSnapshot>,
}

impl AccountStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(StoreSnapshot::default());
        Self { tx }
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        self.tx.borrow().clone()
    }

    /// Subscribe to snapshot replacements.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.tx.subscribe()
    }

    /// Replace the account map wholesale after a successful refresh.
    pub(crate) fn replace_accounts(&self, accounts: AccountMap) {
        self.tx.send_modify(|snapshot| {
            snapshot.accounts = accounts;
            snapshot.accounts_loaded = true;
            snapshot.load_failed = false;
        });
    }

    /// Replace the statistics after a successful stats refresh.
    pub(crate) fn replace_stats(&self, stats: AccountStats) {
        self.tx.send_modify(|snapshot| {
            snapshot.stats = Some(stats);
        });
    }

    /// Surface an accounts-refresh failure without discarding loaded data.
    pub(crate) fn mark_load_failed(&self) {
        self.tx.send_modify(|snapshot| {
            snapshot.load_failed = true;
        });
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}
