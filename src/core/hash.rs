//! Hash functions used to build merkle trees
//!
//! A tree is generic over a [`MerkleHasher`], which fixes the hash function
//! for the lifetime of that tree. Two implementations are provided:
//! [`Keccak256Hasher`] (the Ethereum convention, and the default) and
//! [`Sha256Hasher`].

use crate::core::types::Hash;
use digest::Digest;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::Keccak256;
use std::fmt;
use std::str::FromStr;

/// A 256-bit cryptographic hash function usable for tree construction
pub trait MerkleHasher {
    /// Algorithm identifier, recorded in proof documents
    const ALGORITHM: HashAlgorithm;

    /// Hash arbitrary bytes
    fn hash(data: &[u8]) -> Hash;

    /// Hash the concatenation `left || right`
    fn hash_pair(left: &Hash, right: &Hash) -> Hash;

    /// Hash two nodes after ordering them byte-lexicographically
    ///
    /// The result does not depend on argument order, which is what lets a
    /// verifier fold a proof without knowing tree positions.
    fn hash_sorted_pair(a: &Hash, b: &Hash) -> Hash {
        if a <= b {
            Self::hash_pair(a, b)
        } else {
            Self::hash_pair(b, a)
        }
    }
}

/// Keccak-256 (as used by Ethereum, not NIST SHA3-256)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256Hasher;

impl MerkleHasher for Keccak256Hasher {
    const ALGORITHM: HashAlgorithm = HashAlgorithm::Keccak256;

    fn hash(data: &[u8]) -> Hash {
        keccak256(data)
    }

    fn hash_pair(left: &Hash, right: &Hash) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        Hash::from_bytes(hasher.finalize().into())
    }
}

/// SHA-256
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    const ALGORITHM: HashAlgorithm = HashAlgorithm::Sha256;

    fn hash(data: &[u8]) -> Hash {
        sha256(data)
    }

    fn hash_pair(left: &Hash, right: &Hash) -> Hash {
        let mut hasher = Sha256::new();
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        Hash::from_bytes(hasher.finalize().into())
    }
}

/// Compute Keccak-256 hash of data
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    Hash::from_bytes(hasher.finalize().into())
}

/// Compute SHA-256 hash of data
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Hash::from_bytes(hasher.finalize().into())
}

/// Runtime name of a hash function, used by configuration and the CLI
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// Keccak-256
    #[default]
    Keccak256,
    /// SHA-256
    Sha256,
}

impl HashAlgorithm {
    /// Hash bytes with this algorithm
    pub fn digest(self, data: &[u8]) -> Hash {
        match self {
            HashAlgorithm::Keccak256 => Keccak256Hasher::hash(data),
            HashAlgorithm::Sha256 => Sha256Hasher::hash(data),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HashAlgorithm::Keccak256 => "keccak256",
            HashAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keccak256" | "keccak" => Ok(HashAlgorithm::Keccak256),
            "sha256" => Ok(HashAlgorithm::Sha256),
            other => Err(format!(
                "unknown hash algorithm '{}', expected keccak256 or sha256",
                other
            )),
        }
    }
}
