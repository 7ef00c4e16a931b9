//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
