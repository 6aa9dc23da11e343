//! Merkle tree implementation
//!
//! Trees are built in "sorted" mode: leaves are sorted before the first level
//! is formed, and the two children of every internal node are ordered
//! byte-lexicographically before being concatenated and hashed. The root is
//! therefore independent of the order the input values were supplied in.
//!
//! A level with an odd number of nodes pairs its last node with itself.

use crate::core::{
    encoding::LeafEncoding,
    error::{MerkleError, Result},
    hash::{Keccak256Hasher, MerkleHasher},
    types::{Hash, LeafHash, RootHash},
};
use crate::proofs::proof::{Proof, ProofElement, ProofPosition};
use std::fmt;
use std::marker::PhantomData;

/// Immutable merkle tree over a fixed leaf set
pub struct MerkleTree<H: MerkleHasher = Keccak256Hasher> {
    /// All levels of the tree (sorted leaves at index 0, root level last)
    levels: Vec<Vec<Hash>>,
    hasher: PhantomData<fn() -> H>,
}

impl<H: MerkleHasher> MerkleTree<H> {
    /// Build a tree from raw values, canonicalizing and hashing each one
    pub fn from_values<S: AsRef<str>>(values: &[S], encoding: LeafEncoding) -> Result<Self> {
        let leaves = values
            .iter()
            .map(|value| Self::hash_value(value.as_ref(), encoding))
            .collect::<Result<Vec<_>>>()?;
        Self::from_leaf_hashes(&leaves)
    }

    /// Build a tree from already-hashed leaves
    pub fn from_leaf_hashes(leaves: &[LeafHash]) -> Result<Self> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let mut level = leaves.to_vec();
        level.sort_unstable();

        let mut levels = Vec::with_capacity(depth_for(level.len()) + 1);
        while level.len() > 1 {
            let next: Vec<Hash> = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => H::hash_sorted_pair(left, right),
                    [last] => H::hash_sorted_pair(last, last),
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            levels.push(level);
            level = next;
        }
        levels.push(level);

        Ok(Self {
            levels,
            hasher: PhantomData,
        })
    }

    /// Canonicalize and hash a raw value the way leaves are hashed
    pub fn hash_value(value: &str, encoding: LeafEncoding) -> Result<LeafHash> {
        let bytes = encoding.canonicalize(value)?;
        Ok(H::hash(&bytes))
    }

    /// Root hash of the tree
    pub fn root(&self) -> RootHash {
        self.levels[self.levels.len() - 1][0]
    }

    /// Sorted leaf hashes
    pub fn leaves(&self) -> &[LeafHash] {
        &self.levels[0]
    }

    /// All levels, leaves first and root last
    pub fn layers(&self) -> &[Vec<Hash>] {
        &self.levels
    }

    /// Number of leaves, duplicates included
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of hashing levels above the leaves
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Position of a leaf in the sorted leaf level
    pub fn leaf_index(&self, leaf: &LeafHash) -> Option<usize> {
        self.levels[0].binary_search(leaf).ok()
    }

    pub fn contains_leaf(&self, leaf: &LeafHash) -> bool {
        self.leaf_index(leaf).is_some()
    }

    /// Generate an inclusion proof for a raw value
    pub fn proof_for_value(&self, value: &str, encoding: LeafEncoding) -> Result<Proof> {
        let leaf = Self::hash_value(value, encoding)?;
        self.proof_for_leaf(&leaf)
    }

    /// Generate an inclusion proof for a leaf hash
    pub fn proof_for_leaf(&self, leaf: &LeafHash) -> Result<Proof> {
        let mut index = self
            .leaf_index(leaf)
            .ok_or_else(|| MerkleError::leaf_not_found(*leaf))?;

        let mut elements = Vec::with_capacity(self.depth());
        for level in &self.levels[..self.levels.len() - 1] {
            let (sibling_index, position) = if index % 2 == 0 {
                (index + 1, ProofPosition::Right)
            } else {
                (index - 1, ProofPosition::Left)
            };
            // Padded last node of an odd level is its own sibling
            let hash = level.get(sibling_index).copied().unwrap_or(level[index]);
            elements.push(ProofElement { hash, position });
            index /= 2;
        }

        Ok(Proof::new(elements))
    }
}

/// Number of hashing levels needed above `leaf_count` leaves
fn depth_for(leaf_count: usize) -> usize {
    leaf_count.next_power_of_two().trailing_zeros() as usize
}

impl<H: MerkleHasher> Clone for MerkleTree<H> {
    fn clone(&self) -> Self {
        Self {
            levels: self.levels.clone(),
            hasher: PhantomData,
        }
    }
}

impl<H: MerkleHasher> fmt::Debug for MerkleTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("algorithm", &H::ALGORITHM)
            .field("root", &self.root())
            .field("leaves", &self.leaf_count())
            .field("depth", &self.depth())
            .finish()
    }
}

impl<H: MerkleHasher> fmt::Display for MerkleTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (height, level) in self.levels.iter().enumerate().rev() {
            let label = if height == self.depth() {
                "root".to_string()
            } else if height == 0 {
                "leaves".to_string()
            } else {
                format!("level {}", height)
            };
            writeln!(f, "{} ({} node{})", label, level.len(), plural(level.len()))?;
            for hash in level {
                writeln!(f, "  {}", hash)?;
            }
        }
        Ok(())
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
