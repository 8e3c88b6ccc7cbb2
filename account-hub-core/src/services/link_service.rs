//! Link orchestrator: drives the add-account flow.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use account_hub_provider::{descriptor, ProviderKind};

use crate::error::{CoreError, CoreResult};
use crate::services::{log_failure, ServiceContext};
use crate::types::{default_account_name, LinkHandoff};

/// State of one add-account attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkState {
    /// No attempt outstanding; the add affordance is enabled.
    #[default]
    Idle,
    /// Link initiation request issued, response pending.
    Requesting,
    /// Authorization URL received; control handed to the external
    /// authorization surface. Terminal from the orchestrator's point of
    /// view: the link completes out-of-band and the application re-enters
    /// `Idle` on its next load.
    Redirecting,
}

/// Drives the add-account flow, one state machine per provider.
pub struct LinkService {
    ctx: Arc<ServiceContext>,
    states: RwLock<HashMap<ProviderKind, LinkState>>,
}

impl LinkService {
    /// Create a link service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            states: RwLock::new(HashMap::new()),
        }
    }

    /// Current state for one provider.
    pub async fn state(&self, kind: ProviderKind) -> LinkState {
        self.states
            .read()
            .await
            .get(&kind)
            .copied()
            .unwrap_or_default()
    }

    /// States for all providers with a non-default entry, for the
    /// presentation layer.
    pub async fn states(&self) -> HashMap<ProviderKind, LinkState> {
        self.states.read().await.clone()
    }

    /// Whether the add affordance should be enabled for this provider.
    pub async fn is_requestable(&self, kind: ProviderKind) -> bool {
        descriptor(kind).linkable() && self.state(kind).await == LinkState::Idle
    }

    /// Initiate linking for a provider.
    ///
    /// Refuses non-linkable providers before any network call, and rejects
    /// a request while another attempt is outstanding — exactly one
    /// initiation request is issued per attempt. An empty or whitespace
    /// display name defaults to `"<provider> Account"`.
    ///
    /// On success the state moves to [`LinkState::Redirecting`] and the
    /// authorization URL is returned; navigating to it is the caller's
    /// one-way step. On failure the state returns to [`LinkState::Idle`].
    pub async fn begin_link(
        &self,
        kind: ProviderKind,
        display_name: Option<&str>,
    ) -> CoreResult<LinkHandoff> {
        let desc = descriptor(kind);
        if !desc.linkable() {
            let err = CoreError::ProviderNotLinkable(kind.to_string());
            log_failure("Link initiation", &err);
            return Err(err);
        }

        {
            let mut states = self.states.write().await;
            if let Some((busy, _)) = states.iter().find(|(_, s)| **s != LinkState::Idle) {
                let err = CoreError::LinkInFlight(busy.to_string());
                log_failure("Link initiation", &err);
                return Err(err);
            }
            states.insert(kind, LinkState::Requesting);
        }

        let name = match display_name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default_account_name(kind.tag()),
        };

        match self.ctx.api().begin_link(desc, &name).await {
            Ok(handoff) => {
                self.states.write().await.insert(kind, LinkState::Redirecting);
                log::info!("Link initiated for {kind}, handing off to authorization");
                Ok(handoff)
            }
            Err(e) => {
                self.states.write().await.insert(kind, LinkState::Idle);
                log_failure("Link initiation", &e);
                Err(e)
            }
        }
    }

    /// Return every provider to [`LinkState::Idle`]. Called on application
    /// load; any completed link shows up via the next accounts refresh.
    pub async fn reset(&self) {
        self.states.write().await.clear();
    }
}
