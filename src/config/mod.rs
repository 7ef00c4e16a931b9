//! Configuration and path management for Teller

pub mod paths;
pub mod settings;

pub use paths::TellerPaths;
pub use settings::Settings;
