//! Sync engine: keeps the account store consistent with the remote API.

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::{log_failure, ServiceContext};

/// Fetches and refreshes the account store from the remote API.
///
/// The store is only ever replaced wholesale here; a failed refresh leaves
/// the previous snapshot untouched and surfaces a loading-failure signal
/// instead. Accounts and statistics are independent failure domains.
#[derive(Clone)]
pub struct SyncService {
    ctx: Arc<ServiceContext>,
}

impl SyncService {
    /// Create a sync service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Refresh all linked accounts.
    ///
    /// On success the store's account map is replaced wholesale. On failure
    /// the previous map is retained, the failure is logged, and the store's
    /// `load_failed` signal is raised.
    pub async fn refresh_accounts(&self) -> CoreResult<()> {
        match self.ctx.api().list_accounts().await {
            Ok(accounts) => {
                log::debug!("Account refresh complete: {} provider(s)", accounts.len());
                self.ctx.store().replace_accounts(accounts);
                Ok(())
            }
            Err(e) => {
                log_failure("Account refresh", &e);
                self.ctx.store().mark_load_failed();
                Err(e)
            }
        }
    }

    /// Refresh the aggregate statistics.
    ///
    /// A statistics failure never blocks or rolls back an account refresh;
    /// previously loaded statistics are retained.
    pub async fn refresh_stats(&self) -> CoreResult<()> {
        match self.ctx.api().fetch_stats().await {
            Ok(stats) => {
                log::debug!("Statistics refresh complete: {} account(s)", stats.total_accounts);
                self.ctx.store().replace_stats(stats);
                Ok(())
            }
            Err(e) => {
                log_failure("Statistics refresh", &e);
                Err(e)
            }
        }
    }

    /// Initial load: both refreshes run concurrently. Neither cancels the
    /// other; the UI's loading state keys on the accounts refresh alone.
    pub async fn initial_load(&self) {
        let (accounts, stats) = tokio::join!(self.refresh_accounts(), self.refresh_stats());
        if accounts.is_ok() && stats.is_ok() {
            log::info!(
                "Initial load complete: {} account(s)",
                self.ctx.store().snapshot().total_accounts()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, test_account};

    #[tokio::test]
    async fn initial_load_populates_accounts_and_stats() {
        let (ctx, api, _) = create_test_context();
        api.seed_account(test_account("a1", "google", "Work", true)).await;
        api.seed_account(test_account("b1", "github", "Code", false)).await;

        let sync = SyncService::new(Arc::clone(&ctx));
        sync.initial_load().await;

        let snapshot = ctx.store().snapshot();
        assert!(snapshot.accounts_loaded);
        assert_eq!(snapshot.total_accounts(), 2);
        assert_eq!(snapshot.stats.as_ref().map(|s| s.total_accounts), Some(2));
    }

    #[tokio::test]
    async fn accounts_failure_preserves_previous_snapshot() {
        let (ctx, api, _) = create_test_context();
        api.seed_account(test_account("a1", "google", "Work", true)).await;

        let sync = SyncService::new(Arc::clone(&ctx));
        sync.refresh_accounts().await.unwrap();
        assert_eq!(ctx.store().snapshot().total_accounts(), 1);

        api.set_list_error(Some("backend down".to_string())).await;
        let result = sync.refresh_accounts().await;
        assert!(result.is_err());

        let snapshot = ctx.store().snapshot();
        assert!(snapshot.load_failed);
        assert_eq!(snapshot.total_accounts(), 1, "previous data must survive");
    }

    #[tokio::test]
    async fn stats_failure_does_not_block_accounts() {
        let (ctx, api, _) = create_test_context();
        api.seed_account(test_account("a1", "google", "Work", false)).await;
        api.set_stats_error(Some("stats backend down".to_string())).await;

        let sync = SyncService::new(Arc::clone(&ctx));
        sync.initial_load().await;

        let snapshot = ctx.store().snapshot();
        assert!(snapshot.accounts_loaded);
        assert_eq!(snapshot.total_accounts(), 1);
        assert!(snapshot.stats.is_none());
        assert!(!snapshot.load_failed);
    }

    #[tokio::test]
    async fn accounts_failure_does_not_block_stats() {
        let (ctx, api, _) = create_test_context();
        api.seed_account(test_account("a1", "google", "Work", false)).await;
        api.set_list_error(Some("accounts backend down".to_string())).await;

        let sync = SyncService::new(Arc::clone(&ctx));
        sync.initial_load().await;

        let snapshot = ctx.store().snapshot();
        assert!(!snapshot.accounts_loaded);
        assert!(snapshot.load_failed);
        assert_eq!(snapshot.stats.as_ref().map(|s| s.total_accounts), Some(1));
    }

    #[tokio::test]
    async fn consecutive_refreshes_are_identical() {
        let (ctx, api, _) = create_test_context();
        api.seed_account(test_account("a1", "google", "Work", true)).await;
        api.seed_account(test_account("a2", "google", "Home", false)).await;

        let sync = SyncService::new(Arc::clone(&ctx));
        sync.refresh_accounts().await.unwrap();
        let first = ctx.store().snapshot();

        sync.refresh_accounts().await.unwrap();
        let second = ctx.store().snapshot();

        assert_eq!(first.accounts, second.accounts);
        assert_eq!(api.calls().await.list_accounts, 2);
    }
}
