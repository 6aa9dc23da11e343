//! CLI command implementations

pub mod completion;
pub mod config;
pub mod prove;
pub mod root;
pub mod tree;
pub mod verify;

// Common utilities for commands
use crate::cli::CliContext;
use crate::core::{error::MerkleError, hash::MerkleHasher, types::Hash};
use crate::proofs::MerkleTree;
use crate::whitelist::Whitelist;
use anyhow::{Context, Result};
use tracing::debug;

/// Load the whitelist and build its tree with hasher `H`
pub fn load_tree<H: MerkleHasher>(ctx: &CliContext) -> Result<(Whitelist, MerkleTree<H>)> {
    let whitelist = ctx.load_whitelist()?;
    let tree = whitelist
        .build_tree::<H>()
        .context("Failed to build merkle tree")?;

    debug!(
        root = %tree.root(),
        leaves = tree.leaf_count(),
        depth = tree.depth(),
        hash = %H::ALGORITHM,
        "built merkle tree"
    );
    Ok((whitelist, tree))
}

/// Parse a hash given on the command line
pub fn parse_hash(value: &str) -> Result<Hash> {
    Hash::from_hex(value)
        .map_err(|e| MerkleError::invalid_hash(value, e))
        .context("Expected a 32-byte hex hash")
}
