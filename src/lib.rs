//! merkle-whitelist - Sorted-pair Merkle trees for address whitelists
//!
//! Builds a Merkle tree over a set of values (typically Ethereum addresses),
//! exposes its root and produces inclusion proofs that verify against the root
//! alone. Child pairs are ordered before hashing, so proofs carry bare sibling
//! hashes and never need left/right flags.
//!
//! # Core Features
//!
//! - **Sorted-pair hashing**: `parent = H(min(a, b) || max(a, b))`
//! - **Order independence**: leaves are sorted, so input order never affects the root
//! - **Pluggable hashes**: keccak-256 by default, SHA-256 on request
//! - **Portable proofs**: JSON proof documents that verify without the whitelist
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use merkle_whitelist::{verify, LeafEncoding, MerkleTree};
//!
//! let addresses = [
//!     "0x292398ce6f4806420347854Ad42BeBd80Fb81d78",
//!     "0x0000000000000000000000000000000000000001",
//! ];
//! let tree: MerkleTree = MerkleTree::from_values(&addresses, LeafEncoding::Address)?;
//!
//! let proof = tree.proof_for_value(addresses[0], LeafEncoding::Address)?;
//! let valid = verify::<merkle_whitelist::Keccak256Hasher>(
//!     &tree.root(),
//!     addresses[0],
//!     LeafEncoding::Address,
//!     &proof,
//! )?;
//! assert!(valid);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod proofs;
pub mod whitelist;

// Re-export commonly used types
pub use self::core::{
    encoding::LeafEncoding,
    error::{MerkleError, Result},
    hash::{HashAlgorithm, Keccak256Hasher, MerkleHasher, Sha256Hasher},
    types::Hash,
};

pub use proofs::{
    document::ProofDocument,
    merkle::MerkleTree,
    proof::{verify, verify_leaf, Proof, ProofElement, ProofPosition},
};

pub use whitelist::{InvalidEntryPolicy, Whitelist};

/// Current version of merkle-whitelist
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
