//! Remote accounts API abstract trait

use async_trait::async_trait;

use account_hub_provider::ProviderDescriptor;

use crate::error::CoreResult;
use crate::types::{AccountMap, AccountStats, LinkHandoff};

/// Client-side contract for the remote accounts API.
///
/// The production implementation is [`HttpAccountsApi`](crate::api::HttpAccountsApi);
/// tests inject a mock. Every call carries the session credential; a missing
/// or rejected credential surfaces as an ordinary request failure.
#[async_trait]
pub trait AccountsApi: Send + Sync {
    /// Read all linked accounts, grouped by provider tag.
    async fn list_accounts(&self) -> CoreResult<AccountMap>;

    /// Read the server-computed aggregate statistics.
    async fn fetch_stats(&self) -> CoreResult<AccountStats>;

    /// Initiate linking for a provider, carrying the display name for the
    /// new account. Returns the external authorization URL; completing the
    /// link happens out-of-band.
    async fn begin_link(
        &self,
        descriptor: &ProviderDescriptor,
        account_name: &str,
    ) -> CoreResult<LinkHandoff>;

    /// Delete an account and, server-side, all data associated with it.
    async fn remove_account(&self, account_id: &str) -> CoreResult<()>;

    /// Promote an account to primary. The server demotes any previous
    /// primary; the client never computes the demotion locally.
    async fn set_primary(&self, account_id: &str) -> CoreResult<()>;

    /// Change an account's display label.
    async fn rename_account(&self, account_id: &str, name: &str) -> CoreResult<()>;
}
