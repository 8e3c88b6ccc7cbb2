//! Test helper module
//!
//! Provides mock implementations and convenient factory methods.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;

use account_hub_provider::ProviderDescriptor;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{AccountsApi, ConfirmationGate, RemovalPrompt};
use crate::types::{Account, AccountMap, AccountStats, LinkHandoff, ProviderStats};

// ===== MockAccountsApi =====

/// Per-endpoint call counters.
#[derive(Debug, Clone, Default)]
pub struct ApiCalls {
    pub list_accounts: usize,
    pub fetch_stats: usize,
    pub begin_link: usize,
    pub remove_account: usize,
    pub set_primary: usize,
    pub rename_account: usize,
}

/// Injectable per-endpoint failures (message of an HTTP 500 response).
#[derive(Debug, Default)]
struct ApiFailures {
    list: Option<String>,
    stats: Option<String>,
    link: Option<String>,
    remove: Option<String>,
    primary: Option<String>,
    rename: Option<String>,
}

/// In-memory stand-in for the remote API.
///
/// Plays the server's role: mutations change the scripted account map, the
/// stats fetch is computed from it, and `set_primary` enforces the
/// single-primary rule the way the server does.
pub struct MockAccountsApi {
    accounts: RwLock<AccountMap>,
    auth_url: RwLock<String>,
    failures: RwLock<ApiFailures>,
    calls: RwLock<ApiCalls>,
    link_requests: RwLock<Vec<(String, String)>>,
    link_delay: RwLock<Option<Duration>>,
}

impl MockAccountsApi {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(AccountMap::new()),
            auth_url: RwLock::new("https://auth.example.com/consent".to_string()),
            failures: RwLock::new(ApiFailures::default()),
            calls: RwLock::new(ApiCalls::default()),
            link_requests: RwLock::new(Vec::new()),
            link_delay: RwLock::new(None),
        }
    }

    /// Add an account to the scripted server state.
    pub async fn seed_account(&self, account: Account) {
        self.accounts
            .write()
            .await
            .entry(account.provider.clone())
            .or_default()
            .push(account);
    }

    pub async fn set_auth_url(&self, url: impl Into<String>) {
        *self.auth_url.write().await = url.into();
    }

    pub async fn set_list_error(&self, err: Option<String>) {
        self.failures.write().await.list = err;
    }

    pub async fn set_stats_error(&self, err: Option<String>) {
        self.failures.write().await.stats = err;
    }

    pub async fn set_link_error(&self, err: Option<String>) {
        self.failures.write().await.link = err;
    }

    pub async fn set_remove_error(&self, err: Option<String>) {
        self.failures.write().await.remove = err;
    }

    pub async fn set_primary_error(&self, err: Option<String>) {
        self.failures.write().await.primary = err;
    }

    pub async fn set_rename_error(&self, err: Option<String>) {
        self.failures.write().await.rename = err;
    }

    /// Delay each link initiation, for concurrency tests.
    pub async fn set_link_delay(&self, delay: Duration) {
        *self.link_delay.write().await = Some(delay);
    }

    /// Call counts so far.
    pub async fn calls(&self) -> ApiCalls {
        self.calls.read().await.clone()
    }

    /// The most recent link initiation, as `(endpoint path, account name)`.
    pub async fn last_link_request(&self) -> Option<(String, String)> {
        self.link_requests.read().await.last().cloned()
    }

    fn fail(message: &str) -> CoreError {
        CoreError::Api {
            status: 500,
            message: message.to_string(),
        }
    }

    fn not_found(account_id: &str) -> CoreError {
        CoreError::Api {
            status: 404,
            message: format!("account not found: {account_id}"),
        }
    }
}

impl Default for MockAccountsApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountsApi for MockAccountsApi {
    async fn list_accounts(&self) -> CoreResult<AccountMap> {
        self.calls.write().await.list_accounts += 1;
        if let Some(ref msg) = self.failures.read().await.list {
            return Err(Self::fail(msg));
        }
        Ok(self.accounts.read().await.clone())
    }

    async fn fetch_stats(&self) -> CoreResult<AccountStats> {
        self.calls.write().await.fetch_stats += 1;
        if let Some(ref msg) = self.failures.read().await.stats {
            return Err(Self::fail(msg));
        }
        let accounts = self.accounts.read().await;
        let by_provider: HashMap<String, ProviderStats> = accounts
            .iter()
            .map(|(tag, list)| {
                (
                    tag.clone(),
                    ProviderStats {
                        count: u32::try_from(list.len()).unwrap_or(u32::MAX),
                    },
                )
            })
            .collect();
        Ok(AccountStats {
            total_accounts: by_provider.values().map(|s| s.count).sum(),
            by_provider,
        })
    }

    async fn begin_link(
        &self,
        descriptor: &ProviderDescriptor,
        account_name: &str,
    ) -> CoreResult<LinkHandoff> {
        self.calls.write().await.begin_link += 1;
        let delay = *self.link_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.link_requests.write().await.push((
            descriptor.link_path.unwrap_or_default().to_string(),
            account_name.to_string(),
        ));
        if let Some(ref msg) = self.failures.read().await.link {
            return Err(Self::fail(msg));
        }
        Ok(LinkHandoff {
            auth_url: self.auth_url.read().await.clone(),
        })
    }

    async fn remove_account(&self, account_id: &str) -> CoreResult<()> {
        self.calls.write().await.remove_account += 1;
        if let Some(ref msg) = self.failures.read().await.remove {
            return Err(Self::fail(msg));
        }
        let mut accounts = self.accounts.write().await;
        let mut found = false;
        for list in accounts.values_mut() {
            let before = list.len();
            list.retain(|a| a.id != account_id);
            found |= list.len() != before;
        }
        accounts.retain(|_, list| !list.is_empty());
        if found {
            Ok(())
        } else {
            Err(Self::not_found(account_id))
        }
    }

    async fn set_primary(&self, account_id: &str) -> CoreResult<()> {
        self.calls.write().await.set_primary += 1;
        if let Some(ref msg) = self.failures.read().await.primary {
            return Err(Self::fail(msg));
        }
        let mut accounts = self.accounts.write().await;
        if !accounts
            .values()
            .flat_map(|list| list.iter())
            .any(|a| a.id == account_id)
        {
            return Err(Self::not_found(account_id));
        }
        for list in accounts.values_mut() {
            for account in list.iter_mut() {
                account.is_primary = account.id == account_id;
            }
        }
        Ok(())
    }

    async fn rename_account(&self, account_id: &str, name: &str) -> CoreResult<()> {
        self.calls.write().await.rename_account += 1;
        if let Some(ref msg) = self.failures.read().await.rename {
            return Err(Self::fail(msg));
        }
        let mut accounts = self.accounts.write().await;
        for list in accounts.values_mut() {
            if let Some(account) = list.iter_mut().find(|a| a.id == account_id) {
                account.name = name.to_string();
                return Ok(());
            }
        }
        Err(Self::not_found(account_id))
    }
}

// ===== MockConfirmationGate =====

/// Scripted confirmation gate; approves by default.
pub struct MockConfirmationGate {
    decision: RwLock<bool>,
    prompts: RwLock<Vec<RemovalPrompt>>,
}

impl MockConfirmationGate {
    pub fn new() -> Self {
        Self {
            decision: RwLock::new(true),
            prompts: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_decision(&self, decision: bool) {
        *self.decision.write().await = decision;
    }

    /// Prompts presented so far.
    pub async fn prompts(&self) -> Vec<RemovalPrompt> {
        self.prompts.read().await.clone()
    }
}

impl Default for MockConfirmationGate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfirmationGate for MockConfirmationGate {
    async fn confirm_removal(&self, prompt: &RemovalPrompt) -> bool {
        self.prompts.write().await.push(prompt.clone());
        *self.decision.read().await
    }
}

// ===== Factory methods =====

/// Create a test `ServiceContext` with mock adapters.
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockAccountsApi>,
    Arc<MockConfirmationGate>,
) {
    let api = Arc::new(MockAccountsApi::new());
    let confirmations = Arc::new(MockConfirmationGate::new());
    let ctx = Arc::new(ServiceContext::new(api.clone(), confirmations.clone()));
    (ctx, api, confirmations)
}

/// Build a test `Account` with a fixed link timestamp.
pub fn test_account(id: &str, provider: &str, name: &str, is_primary: bool) -> Account {
    Account {
        id: id.to_string(),
        provider: provider.to_string(),
        name: name.to_string(),
        email: format!("{id}@example.com"),
        is_primary,
        connected_at: Utc.with_ymd_and_hms(2026, 1, 15, 10, 30, 0).unwrap(),
    }
}
