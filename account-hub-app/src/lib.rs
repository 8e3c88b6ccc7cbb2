//! Platform-agnostic application bootstrap for Account Hub.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (adapter
//! injection). Every frontend constructs an `AppState` once at startup,
//! injecting its transport and confirmation implementations, then runs
//! `run_startup` before serving its first view.

use std::sync::Arc;

use account_hub_core::services::{
    AccountService, LinkService, ServiceContext, SyncService,
};
use account_hub_core::traits::{AccountsApi, ConfirmationGate};
use account_hub_core::view::{build_view, AccountsView};
use account_hub_core::{CoreError, CoreResult};

/// Platform-agnostic application state.
///
/// Holds all services and the `ServiceContext`.
pub struct AppState {
    /// Service context (holds the injected adapters and the store)
    pub ctx: Arc<ServiceContext>,
    /// Sync engine
    pub sync: SyncService,
    /// Link orchestrator
    pub links: Arc<LinkService>,
    /// Account mutation service
    pub accounts: AccountService,
}

impl AppState {
    /// Run the startup sequence: clear any stale link flow state, then load
    /// accounts and statistics concurrently.
    ///
    /// Load failures are logged and reflected in the store's snapshot; the
    /// application still starts and can retry via the sync engine.
    pub async fn run_startup(&self) {
        log::debug!("Starting up: resetting link state and loading accounts");
        self.links.reset().await;
        self.sync.initial_load().await;
    }

    /// Render the current accounts page state.
    pub async fn view(&self) -> AccountsView {
        let snapshot = self.ctx.store().snapshot();
        let link_states = self.links.states().await;
        build_view(&snapshot, &link_states)
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `accounts_api` — how the remote accounts API is reached
/// - `confirmation_gate` — how removal is confirmed with the user
pub struct AppStateBuilder {
    accounts_api: Option<Arc<dyn AccountsApi>>,
    confirmation_gate: Option<Arc<dyn ConfirmationGate>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts_api: None,
            confirmation_gate: None,
        }
    }

    #[must_use]
    pub fn accounts_api(mut self, api: Arc<dyn AccountsApi>) -> Self {
        self.accounts_api = Some(api);
        self
    }

    #[must_use]
    pub fn confirmation_gate(mut self, gate: Arc<dyn ConfirmationGate>) -> Self {
        self.confirmation_gate = Some(gate);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let accounts_api = self
            .accounts_api
            .ok_or_else(|| CoreError::ValidationError("accounts_api is required".to_string()))?;
        let confirmation_gate = self.confirmation_gate.ok_or_else(|| {
            CoreError::ValidationError("confirmation_gate is required".to_string())
        })?;

        let ctx = Arc::new(ServiceContext::new(accounts_api, confirmation_gate));

        let sync = SyncService::new(Arc::clone(&ctx));
        let links = Arc::new(LinkService::new(Arc::clone(&ctx)));
        let accounts = AccountService::new(Arc::clone(&ctx));

        Ok(AppState {
            ctx,
            sync,
            links,
            accounts,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
