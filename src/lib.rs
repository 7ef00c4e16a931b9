//! Teller - Terminal-based bank account ledger
//!
//! This library provides the core functionality for the Teller banking
//! application: a transaction admission ledger over append-only per-account
//! logs, and a file-backed store that persists the whole account collection
//! as a single JSON document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, money) and the
//!   transaction admission rules
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer consumed by front-ends
//! - `cli`: Command-line interface handlers
//! - `display`: Terminal output formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use teller::config::{paths::TellerPaths, settings::Settings};
//! use teller::storage::AccountStore;
//!
//! let paths = TellerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = AccountStore::open(paths.store_file())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TellerError;
