//! User confirmation abstract trait

use async_trait::async_trait;
use serde::Serialize;

/// What the user is asked to confirm before an account is removed.
///
/// Removal cascades server-side: all data associated with the account is
/// deleted along with it, so the decision must be explicit.
#[derive(Debug, Clone, Serialize)]
pub struct RemovalPrompt {
    /// Id of the account to be removed.
    pub account_id: String,
    /// Display label, when the account is present in the local store.
    pub account_name: Option<String>,
}

/// Confirmation as a protocol step: present an intent, await a boolean
/// decision through whatever UI/IPC mechanism the platform offers.
///
/// Platform frontends implement this (dialog, IPC round-trip, ...); tests
/// inject a scripted gate.
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    /// Returns `true` if the user approved the removal.
    async fn confirm_removal(&self, prompt: &RemovalPrompt) -> bool;
}
