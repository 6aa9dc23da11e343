//! Command-line interface for merkle-whitelist

use crate::core::{encoding::LeafEncoding, hash::HashAlgorithm};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

pub mod commands;
pub mod context;

pub use context::CliContext;

/// merkle-whitelist - Sorted-pair Merkle trees for address whitelists
#[derive(Parser)]
#[command(
    name = "merkle-whitelist",
    version,
    about = "Build sorted-pair Merkle trees over address whitelists and prove membership",
    long_about = "merkle-whitelist hashes every whitelisted value into a leaf, builds a \
                  sorted-pair Merkle tree and prints its root together with inclusion proofs \
                  that can be checked without the tree."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Whitelist file (JSON array or one value per line)
    #[arg(short, long, global = true, env = "MERKLE_WHITELIST")]
    pub whitelist: Option<PathBuf>,

    /// Hash function used for leaves and internal nodes
    #[arg(long, global = true, value_enum)]
    pub hash: Option<HashAlgorithm>,

    /// How raw values are converted to bytes before hashing
    #[arg(long, global = true, value_enum)]
    pub encoding: Option<LeafEncoding>,

    /// Drop whitelist entries that cannot be encoded instead of failing
    #[arg(long, global = true)]
    pub skip_invalid: bool,

    /// Path to configuration file (default: ~/.merkle-whitelist/config.toml)
    #[arg(long, global = true, env = "MERKLE_WHITELIST_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the root hash of the whitelist tree
    Root {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the root and an inclusion proof for a value
    Prove {
        /// Value to prove (e.g. an address)
        #[arg(value_name = "VALUE")]
        value: String,

        /// Output the proof document as JSON
        #[arg(long)]
        json: bool,

        /// Write the proof document to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify an inclusion proof without the whitelist
    Verify {
        /// Value to verify (required unless --proof is given)
        #[arg(value_name = "VALUE")]
        value: Option<String>,

        /// Expected root hash
        #[arg(long)]
        root: Option<String>,

        /// Sibling hash, leaf level first (repeat or comma-separate)
        #[arg(long = "sibling", value_delimiter = ',')]
        siblings: Vec<String>,

        /// Proof document produced by `prove --output`
        #[arg(long, conflicts_with = "siblings")]
        proof: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every level of the tree
    Tree {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get and set configuration values
    Config {
        /// Configuration key (tree.hash, tree.encoding, whitelist.path, whitelist.skip_invalid)
        key: Option<String>,

        /// Value to set
        value: Option<String>,

        /// List all configuration values
        #[arg(short, long)]
        list: bool,

        /// Unset a configuration value
        #[arg(long)]
        unset: bool,

        /// Show configuration file location
        #[arg(long)]
        show_origin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
