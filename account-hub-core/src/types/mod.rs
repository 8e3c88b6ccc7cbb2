//! Core type definitions

mod account;
mod stats;

pub use account::{default_account_name, Account, AccountMap, LinkHandoff};
pub use stats::{AccountStats, ProviderStats};

pub(crate) use account::{AccountsEnvelope, BeginLinkBody, RenameBody};
pub(crate) use stats::StatsEnvelope;
