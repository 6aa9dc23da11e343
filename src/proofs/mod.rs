//! Merkle tree construction, inclusion proofs and verification
//!
//! Trees are immutable once built. Proofs are plain values derived from a
//! tree and can be verified with nothing more than the root and the leaf.

pub mod document;
pub mod merkle;
pub mod proof;

// Re-export commonly used items
pub use document::{ProofDocument, PROOF_FORMAT_VERSION};
pub use merkle::MerkleTree;
pub use proof::{verify, verify_leaf, Proof, ProofElement, ProofPosition};
