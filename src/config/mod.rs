//! Global configuration management for merkle-whitelist
//!
//! This module stores user defaults (hash function, leaf encoding, whitelist
//! location) in ~/.merkle-whitelist/config.toml

pub mod global_config;

// Re-export commonly used items
pub use global_config::{ConfigKey, GlobalConfig, TreeConfig, WhitelistConfig};
