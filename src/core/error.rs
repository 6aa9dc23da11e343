//! Error types for merkle-whitelist

use crate::core::types::Hash;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for merkle-whitelist operations
#[derive(Error, Debug)]
pub enum MerkleError {
    /// Tree construction errors
    #[error("Cannot build a merkle tree from an empty leaf set")]
    EmptyInput,

    /// Proof generation errors
    #[error("Leaf not found in tree: {leaf}")]
    LeafNotFound { leaf: Hash },

    /// Canonicalization errors
    #[error("Invalid input {value:?}: {reason}")]
    InvalidInput { value: String, reason: String },

    #[error("Invalid hash {value:?}: {source}")]
    InvalidHash {
        value: String,
        #[source]
        source: hex::FromHexError,
    },

    /// Proof document errors
    #[error("Invalid proof format: {reason}")]
    InvalidProofFormat { reason: String },

    /// Whitelist file errors
    #[error("Unsupported whitelist format for {}: {reason}", .path.display())]
    UnsupportedFormat { path: PathBuf, reason: String },

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Hex encoding/decoding errors
    #[error("Hex encoding error: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl MerkleError {
    /// Create a new leaf not found error
    pub fn leaf_not_found(leaf: Hash) -> Self {
        Self::LeafNotFound { leaf }
    }

    /// Create a new invalid input error
    pub fn invalid_input(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid hash error
    pub fn invalid_hash(value: impl Into<String>, source: hex::FromHexError) -> Self {
        Self::InvalidHash {
            value: value.into(),
            source,
        }
    }

    /// Create a new invalid proof format error
    pub fn invalid_proof_format(reason: impl Into<String>) -> Self {
        Self::InvalidProofFormat {
            reason: reason.into(),
        }
    }

    /// Create a new unsupported format error
    pub fn unsupported_format(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            path,
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }

    /// Whether this error means the value is simply not in the tree
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::LeafNotFound { .. })
    }
}

/// Result type alias for merkle-whitelist operations
pub type Result<T> = std::result::Result<T, MerkleError>;
