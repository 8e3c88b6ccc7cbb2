//! Presentation adapter: maps the account store into renderable view state.
//!
//! Pure mapping only — no persistence, no business rules. Provider glyphs,
//! colors, and capability flags come from the descriptor set; unrecognized
//! server tags render with the fallback descriptor so the UI degrades
//! gracefully when the server introduces a new provider.

use std::collections::HashMap;

use serde::Serialize;

use account_hub_provider::{descriptor, fallback_descriptor, ProviderKind};

use crate::services::LinkState;
use crate::store::StoreSnapshot;
use crate::types::{Account, AccountStats};

/// One provider's slice of the accounts page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSection {
    /// Provider tag this section renders.
    pub provider: String,
    /// Human-readable provider name.
    pub display_name: String,
    /// Icon glyph identifier.
    pub glyph: String,
    /// Accent color (CSS hex).
    pub accent_color: String,
    /// Whether the add-account affordance exists for this provider.
    pub linkable: bool,
    /// Whether an add-account attempt is outstanding; the affordance is
    /// disabled while true.
    pub adding: bool,
    /// Linked accounts, in server order.
    pub accounts: Vec<Account>,
}

/// Renderable state for the whole accounts page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsView {
    /// True until the first accounts refresh completes.
    pub loading: bool,
    /// True when the most recent accounts refresh failed.
    pub load_failed: bool,
    /// Per-provider sections: every known provider (even with zero
    /// accounts, so its add affordance renders), then any unknown tags the
    /// server reported, in stable order.
    pub sections: Vec<ProviderSection>,
    /// Aggregate statistics from the last successful stats refresh.
    pub stats: Option<AccountStats>,
}

/// Build the accounts page view from a store snapshot and the link
/// orchestrator's per-provider states.
#[must_use]
pub fn build_view(
    snapshot: &StoreSnapshot,
    link_states: &HashMap<ProviderKind, LinkState>,
) -> AccountsView {
    let mut sections = Vec::new();

    for kind in ProviderKind::ALL {
        let desc = descriptor(kind);
        let state = link_states.get(&kind).copied().unwrap_or_default();
        sections.push(ProviderSection {
            provider: kind.tag().to_string(),
            display_name: desc.display_name.to_string(),
            glyph: desc.glyph.to_string(),
            accent_color: desc.accent_color.to_string(),
            linkable: desc.linkable(),
            adding: state != LinkState::Idle,
            accounts: snapshot.accounts.get(kind.tag()).cloned().unwrap_or_default(),
        });
    }

    let mut unknown_tags: Vec<&String> = snapshot
        .accounts
        .keys()
        .filter(|tag| ProviderKind::from_tag(tag).is_none())
        .collect();
    unknown_tags.sort();

    for tag in unknown_tags {
        let desc = fallback_descriptor();
        sections.push(ProviderSection {
            provider: tag.clone(),
            display_name: desc.display_name.to_string(),
            glyph: desc.glyph.to_string(),
            accent_color: desc.accent_color.to_string(),
            linkable: false,
            adding: false,
            accounts: snapshot.accounts.get(tag).cloned().unwrap_or_default(),
        });
    }

    AccountsView {
        loading: !snapshot.accounts_loaded,
        load_failed: snapshot.load_failed,
        sections,
        stats: snapshot.stats.clone(),
    }
}
