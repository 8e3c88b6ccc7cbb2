//! # account-hub-provider
//!
//! Capability descriptors for the third-party providers Account Hub can
//! link against.
//!
//! Every provider-specific fact the application needs — display name, icon
//! glyph, accent color, whether the provider can currently be linked, and
//! the link-initiation endpoint — lives in a single static
//! [`ProviderDescriptor`] record. Adding a provider is a data change here,
//! not a code change spread across the client.
//!
//! ## Usage
//!
//! ```rust
//! use account_hub_provider::{descriptor, ProviderKind};
//!
//! let google = descriptor(ProviderKind::Google);
//! assert!(google.linkable());
//!
//! let jira = descriptor(ProviderKind::Jira);
//! assert!(!jira.linkable());
//! ```
//!
//! Unrecognized provider tags reported by the server resolve to a neutral
//! fallback descriptor via [`descriptor_for_tag`], so the UI degrades
//! gracefully instead of failing on new providers.

mod descriptor;

pub use descriptor::{
    all_descriptors, descriptor, descriptor_for_tag, fallback_descriptor, ProviderDescriptor,
    ProviderKind,
};
