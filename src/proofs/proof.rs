//! Inclusion proofs and their verification
//!
//! Verification only needs the root, the leaf and the sibling hashes. Each
//! step hashes the running value with the next sibling using the same sorted
//! pair rule as tree construction, so the recorded positions are never
//! consulted.

use crate::core::{
    encoding::LeafEncoding,
    error::Result,
    hash::MerkleHasher,
    types::{Hash, LeafHash, RootHash},
};
use serde::{Deserialize, Serialize};

/// A single element in a merkle proof path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofElement {
    /// Hash of the sibling node
    pub hash: Hash,
    /// Whether the sibling sat on the left or right of the pairing
    pub position: ProofPosition,
}

/// Position of a sibling in a merkle proof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofPosition {
    Left,
    Right,
}

/// Sibling path from a leaf up to (but excluding) the root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Proof {
    elements: Vec<ProofElement>,
}

impl Proof {
    pub fn new(elements: Vec<ProofElement>) -> Self {
        Self { elements }
    }

    /// Proof elements, leaf level first
    pub fn elements(&self) -> &[ProofElement] {
        &self.elements
    }

    /// Mutable access to the elements
    pub fn elements_mut(&mut self) -> &mut [ProofElement] {
        &mut self.elements
    }

    /// Sibling hashes, leaf level first
    pub fn siblings(&self) -> impl Iterator<Item = &Hash> + '_ {
        self.elements.iter().map(|element| &element.hash)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Siblings as `0x`-prefixed hex strings
    pub fn to_hex_vec(&self) -> Vec<String> {
        self.siblings().map(Hash::to_prefixed_hex).collect()
    }

    /// Recompute the root this proof leads to from `leaf`
    pub fn compute_root<H: MerkleHasher>(&self, leaf: &LeafHash) -> RootHash {
        fold_siblings::<H, _>(leaf, self.siblings())
    }

    /// Check that this proof links `leaf` to `root`
    pub fn verify<H: MerkleHasher>(&self, root: &RootHash, leaf: &LeafHash) -> bool {
        self.compute_root::<H>(leaf) == *root
    }
}

impl FromIterator<ProofElement> for Proof {
    fn from_iter<I: IntoIterator<Item = ProofElement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn fold_siblings<'a, H, I>(leaf: &LeafHash, siblings: I) -> Hash
where
    H: MerkleHasher,
    I: IntoIterator<Item = &'a Hash>,
{
    siblings
        .into_iter()
        .fold(*leaf, |running, sibling| H::hash_sorted_pair(&running, sibling))
}

/// Verify that a raw value is included under `root`
///
/// Fails only if the value cannot be canonicalized with `encoding`.
pub fn verify<H: MerkleHasher>(
    root: &RootHash,
    value: &str,
    encoding: LeafEncoding,
    proof: &Proof,
) -> Result<bool> {
    let leaf = H::hash(&encoding.canonicalize(value)?);
    Ok(proof.verify::<H>(root, &leaf))
}

/// Verify a leaf hash against a bare list of sibling hashes
pub fn verify_leaf<H: MerkleHasher>(root: &RootHash, leaf: &LeafHash, siblings: &[Hash]) -> bool {
    fold_siblings::<H, _>(leaf, siblings) == *root
}
