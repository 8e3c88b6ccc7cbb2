//! Boundary abstraction trait definitions

mod accounts_api;
mod confirmation;

pub use accounts_api::AccountsApi;
pub use confirmation::{ConfirmationGate, RemovalPrompt};
