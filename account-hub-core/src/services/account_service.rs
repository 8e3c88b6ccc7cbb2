//! Mutation operations: remove, rename, promote-to-primary.
//!
//! Each mutation is a single authenticated remote call followed by a full
//! accounts refresh (removal also refreshes statistics). The refresh is
//! issued only after the mutation's own request settles successfully; on
//! failure no refresh happens and the store keeps its pre-mutation state.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::{log_failure, ServiceContext, SyncService};
use crate::traits::RemovalPrompt;

/// Account mutation service.
pub struct AccountService {
    ctx: Arc<ServiceContext>,
    sync: SyncService,
}

impl AccountService {
    /// Create an account service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let sync = SyncService::new(Arc::clone(&ctx));
        Self { ctx, sync }
    }

    /// Remove a linked account and, server-side, all data associated with
    /// it.
    ///
    /// Requires an explicit user decision through the confirmation gate;
    /// a declined confirmation aborts before any network call. Whether a
    /// repeated removal of an already-removed id succeeds is the remote
    /// API's concern and surfaces as an API failure if rejected.
    pub async fn remove_account(&self, account_id: &str) -> CoreResult<()> {
        let prompt = RemovalPrompt {
            account_id: account_id.to_string(),
            account_name: self
                .ctx
                .store()
                .snapshot()
                .find_account(account_id)
                .map(|a| a.name.clone()),
        };

        if !self.ctx.confirmations().confirm_removal(&prompt).await {
            log::info!("Removal of account {account_id} declined");
            return Err(CoreError::RemovalNotConfirmed(account_id.to_string()));
        }

        self.ctx
            .api()
            .remove_account(account_id)
            .await
            .map_err(|e| {
                log_failure("Account removal", &e);
                e
            })?;

        log::info!("Account {account_id} removed");
        // refresh failures are logged by the sync engine; the mutation
        // itself has already succeeded
        let _ = tokio::join!(self.sync.refresh_accounts(), self.sync.refresh_stats());
        Ok(())
    }

    /// Promote an account to primary.
    ///
    /// The server demotes any previous primary; the client displays nothing
    /// locally until the triggered refresh lands. Promoting an
    /// already-primary account is passed through unchanged — the outcome is
    /// whatever the server decides.
    pub async fn set_primary(&self, account_id: &str) -> CoreResult<()> {
        self.ctx.api().set_primary(account_id).await.map_err(|e| {
            log_failure("Primary promotion", &e);
            e
        })?;

        log::info!("Account {account_id} promoted to primary");
        let _ = self.sync.refresh_accounts().await;
        Ok(())
    }

    /// Rename a linked account.
    ///
    /// The new name must be non-empty; a rename identical to the current
    /// name is a no-op and issues zero network calls.
    pub async fn rename_account(&self, account_id: &str, new_name: &str) -> CoreResult<()> {
        let name = new_name.trim();
        if name.is_empty() {
            let err = CoreError::ValidationError("account name must not be empty".to_string());
            log_failure("Account rename", &err);
            return Err(err);
        }

        let snapshot = self.ctx.store().snapshot();
        let current = snapshot
            .find_account(account_id)
            .ok_or_else(|| CoreError::AccountNotFound(account_id.to_string()))?;
        if current.name == name {
            log::debug!("Rename of account {account_id} is a no-op");
            return Ok(());
        }

        self.ctx
            .api()
            .rename_account(account_id, name)
            .await
            .map_err(|e| {
                log_failure("Account rename", &e);
                e
            })?;

        log::info!("Account {account_id} renamed");
        let _ = self.sync.refresh_accounts().await;
        Ok(())
    }
}
