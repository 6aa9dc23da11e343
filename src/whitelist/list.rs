//! In-memory whitelist of raw values

use crate::core::{
    encoding::LeafEncoding,
    error::{MerkleError, Result},
    hash::MerkleHasher,
};
use crate::proofs::merkle::MerkleTree;
use crate::whitelist::parser::{parse_content, RawEntry, WhitelistFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// What to do with entries that cannot be canonicalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidEntryPolicy {
    /// Fail the whole load on the first invalid entry
    #[default]
    Reject,
    /// Drop invalid entries and keep going
    Skip,
}

/// An entry dropped under [`InvalidEntryPolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub position: usize,
    pub value: String,
    pub reason: String,
}

/// Ordered list of validated raw values
#[derive(Debug, Clone)]
pub struct Whitelist {
    values: Vec<String>,
    skipped: Vec<SkippedEntry>,
    encoding: LeafEncoding,
}

impl Whitelist {
    /// Load a whitelist file, picking the format from its extension
    pub fn load(path: &Path, encoding: LeafEncoding, policy: InvalidEntryPolicy) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let format = WhitelistFormat::from_path(path);
        debug!(path = %path.display(), ?format, "parsing whitelist");

        let entries = parse_content(&content, format, path)?;
        let whitelist = Self::from_entries(entries, encoding, policy)?;

        info!(
            path = %path.display(),
            entries = whitelist.len(),
            skipped = whitelist.skipped.len(),
            "loaded whitelist"
        );
        Ok(whitelist)
    }

    /// Build a whitelist from values already in memory
    pub fn from_values<I, S>(
        values: I,
        encoding: LeafEncoding,
        policy: InvalidEntryPolicy,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| RawEntry {
                position: index + 1,
                value: value.into(),
            })
            .collect();
        Self::from_entries(entries, encoding, policy)
    }

    fn from_entries(
        entries: Vec<RawEntry>,
        encoding: LeafEncoding,
        policy: InvalidEntryPolicy,
    ) -> Result<Self> {
        let mut values = Vec::with_capacity(entries.len());
        let mut skipped = Vec::new();

        for entry in entries {
            match encoding.canonicalize(&entry.value) {
                Ok(_) => values.push(entry.value),
                Err(err) => match policy {
                    InvalidEntryPolicy::Reject => return Err(err),
                    InvalidEntryPolicy::Skip => {
                        let reason = match &err {
                            MerkleError::InvalidInput { reason, .. } => reason.clone(),
                            other => other.to_string(),
                        };
                        warn!(
                            position = entry.position,
                            value = %entry.value,
                            %reason,
                            "skipping invalid whitelist entry"
                        );
                        skipped.push(SkippedEntry {
                            position: entry.position,
                            value: entry.value,
                            reason,
                        });
                    },
                },
            }
        }

        Ok(Self {
            values,
            skipped,
            encoding,
        })
    }

    /// Validated raw values, in file order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Entries dropped because they could not be canonicalized
    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    pub fn encoding(&self) -> LeafEncoding {
        self.encoding
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build a merkle tree over the whitelist
    pub fn build_tree<H: MerkleHasher>(&self) -> Result<MerkleTree<H>> {
        MerkleTree::from_values(&self.values, self.encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::Keccak256Hasher;

    const GOOD: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1";

    #[test]
    fn test_reject_policy_fails_fast() {
        let result = Whitelist::from_values(
            [GOOD, "0x1234"],
            LeafEncoding::Address,
            InvalidEntryPolicy::Reject,
        );
        assert!(matches!(result, Err(MerkleError::InvalidInput { .. })));
    }

    #[test]
    fn test_skip_policy_records_dropped_entries() {
        let whitelist = Whitelist::from_values(
            ["0x1234", GOOD],
            LeafEncoding::Address,
            InvalidEntryPolicy::Skip,
        )
        .unwrap();

        assert_eq!(whitelist.values(), &[GOOD.to_string()]);
        assert_eq!(whitelist.skipped().len(), 1);
        assert_eq!(whitelist.skipped()[0].position, 1);
        assert_eq!(whitelist.skipped()[0].value, "0x1234");
    }

    #[test]
    fn test_empty_whitelist_cannot_build_tree() {
        let whitelist = Whitelist::from_values(
            Vec::<String>::new(),
            LeafEncoding::Address,
            InvalidEntryPolicy::Reject,
        )
        .unwrap();
        assert!(whitelist.is_empty());
        assert!(matches!(
            whitelist.build_tree::<Keccak256Hasher>(),
            Err(MerkleError::EmptyInput)
        ));
    }

    #[test]
    fn test_build_tree_uses_whitelist_encoding() {
        let whitelist =
            Whitelist::from_values(["alice", "bob"], LeafEncoding::Utf8, InvalidEntryPolicy::Reject)
                .unwrap();
        let tree = whitelist.build_tree::<Keccak256Hasher>().unwrap();
        assert!(tree.proof_for_value("alice", LeafEncoding::Utf8).is_ok());
    }
}
