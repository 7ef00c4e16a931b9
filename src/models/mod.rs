//! Core data models for Teller
//!
//! This module contains the data structures that represent the ledger
//! domain: accounts, their fee settings, transactions, and money amounts.
//! Transaction admission lives on [`Account`] so the log can stay externally
//! read-only.

pub mod account;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountSettings};
pub use ids::AccountId;
pub use money::Money;
pub use transaction::{Transaction, TransactionType};
