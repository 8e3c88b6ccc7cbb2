//! Account Hub Core Library
//!
//! Provides core business logic for managing linked third-party accounts:
//! - Account store (snapshot state + change notification)
//! - Sync engine (accounts and statistics refreshes)
//! - Link orchestrator (add-account flow)
//! - Account mutations (remove / promote / rename)
//! - Presentation adapter (renderable view state)
//!
//! This library is designed to be platform-independent, abstracting the
//! remote API and the removal confirmation surface through traits.

pub mod api;
pub mod error;
pub mod services;
pub mod store;
pub mod traits;
pub mod types;
pub mod view;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{AccountService, LinkService, LinkState, ServiceContext, SyncService};
pub use store::{AccountStore, StoreSnapshot};
pub use traits::{AccountsApi, ConfirmationGate, RemovalPrompt};
pub use view::{build_view, AccountsView, ProviderSection};
