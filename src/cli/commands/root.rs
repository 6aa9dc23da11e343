use crate::cli::commands::load_tree;
use crate::cli::CliContext;
use crate::core::hash::{HashAlgorithm, Keccak256Hasher, MerkleHasher, Sha256Hasher};
use anyhow::Result;
use colored::Colorize;
use serde_json::json;

/// Execute the root command
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    match ctx.hash {
        HashAlgorithm::Keccak256 => show_root::<Keccak256Hasher>(ctx, json),
        HashAlgorithm::Sha256 => show_root::<Sha256Hasher>(ctx, json),
    }
}

fn show_root<H: MerkleHasher>(ctx: &CliContext, json: bool) -> Result<()> {
    let (whitelist, tree) = load_tree::<H>(ctx)?;

    if json {
        let output = json!({
            "root": tree.root(),
            "leaves": tree.leaf_count(),
            "depth": tree.depth(),
            "hash": H::ALGORITHM,
            "encoding": whitelist.encoding(),
            "skipped": whitelist.skipped().len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if ctx.quiet {
        println!("{}", tree.root());
        return Ok(());
    }

    println!("root : {}", tree.root().to_string().cyan());

    if ctx.verbose {
        println!();
        println!("{}", "Tree Details:".bold());
        println!("  • Leaves: {}", tree.leaf_count());
        println!("  • Depth: {}", tree.depth());
        println!("  • Hash: {}", H::ALGORITHM);
        println!("  • Encoding: {}", whitelist.encoding());
        if !whitelist.skipped().is_empty() {
            println!(
                "  • Skipped entries: {}",
                whitelist.skipped().len().to_string().yellow()
            );
        }
    }

    Ok(())
}
