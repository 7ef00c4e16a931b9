//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod account;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use transaction::format_transaction_list;
