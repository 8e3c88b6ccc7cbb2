//! Business logic service layer

mod account_service;
mod link_service;
mod sync_service;

pub use account_service::AccountService;
pub use link_service::{LinkService, LinkState};
pub use sync_service::SyncService;

use std::sync::Arc;

use crate::error::CoreError;
use crate::store::AccountStore;
use crate::traits::{AccountsApi, ConfirmationGate};

/// Service context — holds all injected dependencies plus the shared store.
///
/// The platform layer creates this once at startup, injecting its transport
/// and confirmation implementations.
pub struct ServiceContext {
    api: Arc<dyn AccountsApi>,
    confirmations: Arc<dyn ConfirmationGate>,
    store: AccountStore,
}

impl ServiceContext {
    /// Create a service context.
    #[must_use]
    pub fn new(api: Arc<dyn AccountsApi>, confirmations: Arc<dyn ConfirmationGate>) -> Self {
        Self {
            api,
            confirmations,
            store: AccountStore::new(),
        }
    }

    /// The remote API transport.
    #[must_use]
    pub fn api(&self) -> &Arc<dyn AccountsApi> {
        &self.api
    }

    /// The user confirmation gate.
    #[must_use]
    pub fn confirmations(&self) -> &Arc<dyn ConfirmationGate> {
        &self.confirmations
    }

    /// The shared account store.
    #[must_use]
    pub fn store(&self) -> &AccountStore {
        &self.store
    }
}

/// Log an operation failure at the level its classification calls for.
pub(crate) fn log_failure(operation: &str, error: &CoreError) {
    if error.is_expected() {
        log::warn!("{operation} failed: {error}");
    } else {
        log::error!("{operation} failed: {error}");
    }
}
