//! Provider kinds and their static capability descriptors.

use serde::{Deserialize, Serialize};

/// Identifies a third-party provider an account can be linked to.
///
/// Serialized as lowercase tags (`"google"`, `"jira"`, `"github"`), matching
/// the keys the remote API uses in its account map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google (calendar/tasks). The only linkable provider in the current
    /// feature set.
    Google,
    /// Atlassian Jira. Advertised but not yet linkable.
    Jira,
    /// GitHub. Advertised but not yet linkable.
    Github,
}

impl ProviderKind {
    /// All known provider kinds, in display order.
    pub const ALL: [Self; 3] = [Self::Google, Self::Jira, Self::Github];

    /// The wire tag for this provider (`"google"`, `"jira"`, `"github"`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Jira => "jira",
            Self::Github => "github",
        }
    }

    /// Parse a server-reported tag into a known kind.
    ///
    /// Returns `None` for tags this build does not recognize; callers are
    /// expected to fall back to [`fallback_descriptor`] rather than fail.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "google" => Some(Self::Google),
            "jira" => Some(Self::Jira),
            "github" => Some(Self::Github),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Static capability record for a provider.
///
/// Everything the client needs to render and drive a provider lives here:
/// presentation data (glyph, accent color), the linkable capability flag,
/// and the link-initiation endpoint template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDescriptor {
    /// Known kind, or `None` for the fallback descriptor.
    pub kind: Option<ProviderKind>,
    /// Human-readable provider name.
    pub display_name: &'static str,
    /// Icon glyph identifier for UI rendering.
    pub glyph: &'static str,
    /// Accent color (CSS hex) for UI rendering.
    pub accent_color: &'static str,
    /// Link-initiation endpoint path, present only when linking is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_path: Option<&'static str>,
}

impl ProviderDescriptor {
    /// Whether the add-account flow may be initiated for this provider.
    #[must_use]
    pub fn linkable(&self) -> bool {
        self.link_path.is_some()
    }
}

static GOOGLE: ProviderDescriptor = ProviderDescriptor {
    kind: Some(ProviderKind::Google),
    display_name: "Google",
    glyph: "google",
    accent_color: "#4285F4",
    link_path: Some("/api/accounts/google/add"),
};

static JIRA: ProviderDescriptor = ProviderDescriptor {
    kind: Some(ProviderKind::Jira),
    display_name: "Jira",
    glyph: "jira",
    accent_color: "#0052CC",
    link_path: None,
};

static GITHUB: ProviderDescriptor = ProviderDescriptor {
    kind: Some(ProviderKind::Github),
    display_name: "GitHub",
    glyph: "github",
    accent_color: "#24292E",
    link_path: None,
};

static FALLBACK: ProviderDescriptor = ProviderDescriptor {
    kind: None,
    display_name: "Linked Account",
    glyph: "link",
    accent_color: "#6B7280",
    link_path: None,
};

/// Returns the descriptor for a known provider kind.
#[must_use]
pub fn descriptor(kind: ProviderKind) -> &'static ProviderDescriptor {
    match kind {
        ProviderKind::Google => &GOOGLE,
        ProviderKind::Jira => &JIRA,
        ProviderKind::Github => &GITHUB,
    }
}

/// Returns the descriptor for a server-reported tag, falling back to the
/// neutral descriptor for tags this build does not know.
#[must_use]
pub fn descriptor_for_tag(tag: &str) -> &'static ProviderDescriptor {
    ProviderKind::from_tag(tag).map_or(&FALLBACK, descriptor)
}

/// The neutral descriptor used for unrecognized provider tags.
#[must_use]
pub fn fallback_descriptor() -> &'static ProviderDescriptor {
    &FALLBACK
}

/// Descriptors for all known providers, in display order.
#[must_use]
pub fn all_descriptors() -> Vec<&'static ProviderDescriptor> {
    ProviderKind::ALL.iter().map(|k| descriptor(*k)).collect()
}
