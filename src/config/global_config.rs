//! Global configuration management
//!
//! Provides user defaults stored in ~/.merkle-whitelist/config.toml

use crate::core::{
    encoding::LeafEncoding,
    error::{MerkleError, Result},
    hash::HashAlgorithm,
};
use crate::whitelist::InvalidEntryPolicy;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory under the home directory holding the config file
const CONFIG_DIR: &str = ".merkle-whitelist";
const CONFIG_FILE: &str = "config.toml";

/// Global configuration for merkle-whitelist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Tree construction defaults
    pub tree: TreeConfig,
    /// Whitelist source defaults
    pub whitelist: WhitelistConfig,
}

/// Tree construction defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Hash function
    pub hash: Option<HashAlgorithm>,
    /// Leaf encoding
    pub encoding: Option<LeafEncoding>,
}

/// Whitelist source defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhitelistConfig {
    /// Whitelist file used when none is given on the command line
    pub path: Option<PathBuf>,
    /// Drop invalid entries instead of failing
    pub skip_invalid: Option<bool>,
}

/// Configuration key for getting and setting values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    TreeHash,
    TreeEncoding,
    WhitelistPath,
    WhitelistSkipInvalid,
}

impl ConfigKey {
    /// All known keys, in listing order
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::TreeHash,
        ConfigKey::TreeEncoding,
        ConfigKey::WhitelistPath,
        ConfigKey::WhitelistSkipInvalid,
    ];

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "tree.hash" => Some(ConfigKey::TreeHash),
            "tree.encoding" => Some(ConfigKey::TreeEncoding),
            "whitelist.path" => Some(ConfigKey::WhitelistPath),
            "whitelist.skip_invalid" => Some(ConfigKey::WhitelistSkipInvalid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::TreeHash => "tree.hash",
            ConfigKey::TreeEncoding => "tree.encoding",
            ConfigKey::WhitelistPath => "whitelist.path",
            ConfigKey::WhitelistSkipInvalid => "whitelist.skip_invalid",
        }
    }
}

impl GlobalConfig {
    /// Load global configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            // Return default configuration if file doesn't exist
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        toml::from_str(&content).map_err(|e| {
            MerkleError::configuration(format!(
                "Failed to parse config {}: {}",
                config_path.display(),
                e
            ))
        })
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the path to the global configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let user_dirs = UserDirs::new().ok_or(MerkleError::HomeDirectoryNotFound)?;
        Ok(user_dirs.home_dir().join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Get a configuration value as a string
    pub fn get(&self, key: ConfigKey) -> Option<String> {
        match key {
            ConfigKey::TreeHash => self.tree.hash.map(|h| h.to_string()),
            ConfigKey::TreeEncoding => self.tree.encoding.map(|e| e.to_string()),
            ConfigKey::WhitelistPath => self
                .whitelist
                .path
                .as_ref()
                .map(|p| p.display().to_string()),
            ConfigKey::WhitelistSkipInvalid => self.whitelist.skip_invalid.map(|b| b.to_string()),
        }
    }

    /// Set a configuration value from its string form
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::TreeHash => {
                self.tree.hash = Some(value.parse().map_err(MerkleError::configuration)?);
            },
            ConfigKey::TreeEncoding => {
                self.tree.encoding = Some(value.parse().map_err(MerkleError::configuration)?);
            },
            ConfigKey::WhitelistPath => {
                if value.trim().is_empty() {
                    return Err(MerkleError::configuration(
                        "whitelist.path must not be empty",
                    ));
                }
                self.whitelist.path = Some(PathBuf::from(value));
            },
            ConfigKey::WhitelistSkipInvalid => {
                let enabled = value.parse::<bool>().map_err(|_| {
                    MerkleError::configuration("whitelist.skip_invalid must be true or false")
                })?;
                self.whitelist.skip_invalid = Some(enabled);
            },
        }
        Ok(())
    }

    /// Unset a configuration value
    pub fn unset(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::TreeHash => self.tree.hash = None,
            ConfigKey::TreeEncoding => self.tree.encoding = None,
            ConfigKey::WhitelistPath => self.whitelist.path = None,
            ConfigKey::WhitelistSkipInvalid => self.whitelist.skip_invalid = None,
        }
    }

    /// List all configured values
    pub fn list(&self) -> Vec<(&'static str, String)> {
        ConfigKey::ALL
            .iter()
            .filter_map(|key| self.get(*key).map(|value| (key.as_str(), value)))
            .collect()
    }

    /// Hash algorithm, falling back to the built-in default
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.tree.hash.unwrap_or_default()
    }

    /// Leaf encoding, falling back to the built-in default
    pub fn leaf_encoding(&self) -> LeafEncoding {
        self.tree.encoding.unwrap_or_default()
    }

    /// Invalid entry policy, falling back to rejecting
    pub fn invalid_entry_policy(&self) -> InvalidEntryPolicy {
        match self.whitelist.skip_invalid {
            Some(true) => InvalidEntryPolicy::Skip,
            _ => InvalidEntryPolicy::Reject,
        }
    }
}
