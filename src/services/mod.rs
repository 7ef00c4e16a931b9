//! Service layer for Teller
//!
//! The service layer provides the collaborator-facing operations on top of
//! the store, mapping core outcomes onto the error taxonomy (not-found,
//! validation failure, storage fault).

pub mod account;
pub mod transaction;

pub use account::{AccountService, AccountSummary};
pub use transaction::TransactionService;
