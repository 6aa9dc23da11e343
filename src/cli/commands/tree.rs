use crate::cli::commands::load_tree;
use crate::cli::CliContext;
use crate::core::hash::{HashAlgorithm, Keccak256Hasher, MerkleHasher, Sha256Hasher};
use anyhow::Result;
use colored::Colorize;
use serde_json::json;

/// Execute the tree command
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    match ctx.hash {
        HashAlgorithm::Keccak256 => show_tree::<Keccak256Hasher>(ctx, json),
        HashAlgorithm::Sha256 => show_tree::<Sha256Hasher>(ctx, json),
    }
}

fn show_tree<H: MerkleHasher>(ctx: &CliContext, json: bool) -> Result<()> {
    let (_, tree) = load_tree::<H>(ctx)?;

    if json {
        let output = json!({
            "root": tree.root(),
            "depth": tree.depth(),
            "hash": H::ALGORITHM,
            "levels": tree.layers(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !ctx.quiet {
        println!(
            "{} ({} leaves, depth {}, {})",
            "Merkle Tree".green().bold(),
            tree.leaf_count(),
            tree.depth(),
            H::ALGORITHM
        );
        println!("{}", "═".repeat(50).green());
    }
    print!("{}", tree);

    Ok(())
}
