//! Core types and utilities for merkle-whitelist
//!
//! This module contains the hash type, the pluggable hash functions, leaf
//! canonicalization and error handling used throughout the crate.

pub mod encoding;
pub mod error;
pub mod hash;
pub mod types;

// Re-export commonly used items
pub use encoding::LeafEncoding;
pub use error::{MerkleError, Result};
pub use hash::{keccak256, sha256, HashAlgorithm, Keccak256Hasher, MerkleHasher, Sha256Hasher};
pub use types::{Hash, LeafHash, RootHash};
