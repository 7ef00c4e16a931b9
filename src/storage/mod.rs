//! Storage layer for Teller
//!
//! Provides the file-backed account store: one JSON file holding the whole
//! collection, rewritten atomically on every mutation.

pub mod file_io;
pub mod store;

pub use file_io::{read_json, write_json_atomic};
pub use store::AccountStore;
