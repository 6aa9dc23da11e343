//! Self-describing proof documents
//!
//! A [`ProofDocument`] carries everything needed to check a proof away from
//! the tree that produced it: the hash function, the leaf encoding, the raw
//! value, its leaf hash, the root and the sibling path.

use crate::core::{
    encoding::LeafEncoding,
    error::{MerkleError, Result},
    hash::{HashAlgorithm, Keccak256Hasher, MerkleHasher, Sha256Hasher},
    types::{LeafHash, RootHash},
};
use crate::proofs::{merkle::MerkleTree, proof::Proof};
use serde::{Deserialize, Serialize};

/// Current proof document format version
pub const PROOF_FORMAT_VERSION: &str = "1.0";

/// Serializable proof together with its verification context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofDocument {
    /// Version of the proof format
    pub version: String,
    /// Hash function the tree was built with
    pub hash_algorithm: HashAlgorithm,
    /// Encoding used to canonicalize `value`
    pub encoding: LeafEncoding,
    /// Raw value being proved
    pub value: String,
    /// Leaf hash of `value`
    pub leaf: LeafHash,
    /// Root hash to verify against
    pub root: RootHash,
    /// Sibling path from the leaf to the root
    pub proof: Proof,
}

impl ProofDocument {
    /// Generate a proof document for `value` from a tree
    pub fn generate<H: MerkleHasher>(
        tree: &MerkleTree<H>,
        value: &str,
        encoding: LeafEncoding,
    ) -> Result<Self> {
        let leaf = MerkleTree::<H>::hash_value(value, encoding)?;
        let proof = tree.proof_for_leaf(&leaf)?;

        Ok(Self {
            version: PROOF_FORMAT_VERSION.to_string(),
            hash_algorithm: H::ALGORITHM,
            encoding,
            value: value.to_string(),
            leaf,
            root: tree.root(),
            proof,
        })
    }

    /// Verify this document
    ///
    /// Returns `Ok(false)` when the value does not hash to `leaf` or the proof
    /// does not lead to `root`.
    pub fn verify(&self) -> Result<bool> {
        match self.hash_algorithm {
            HashAlgorithm::Keccak256 => self.verify_with::<Keccak256Hasher>(),
            HashAlgorithm::Sha256 => self.verify_with::<Sha256Hasher>(),
        }
    }

    fn verify_with<H: MerkleHasher>(&self) -> Result<bool> {
        let leaf = MerkleTree::<H>::hash_value(&self.value, self.encoding)?;
        if leaf != self.leaf {
            return Ok(false);
        }
        Ok(self.proof.verify::<H>(&self.root, &leaf))
    }

    /// Serialize the document to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(MerkleError::Json)
    }

    /// Deserialize a document from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let document: Self = serde_json::from_str(json)?;
        if document.version != PROOF_FORMAT_VERSION {
            return Err(MerkleError::invalid_proof_format(format!(
                "unsupported version {}, expected {}",
                document.version, PROOF_FORMAT_VERSION
            )));
        }
        Ok(document)
    }
}
