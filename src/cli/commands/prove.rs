use crate::cli::commands::load_tree;
use crate::cli::CliContext;
use crate::core::hash::{HashAlgorithm, Keccak256Hasher, MerkleHasher, Sha256Hasher};
use crate::proofs::{ProofDocument, ProofPosition};
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Execute the prove command
pub fn execute(
    ctx: &CliContext,
    value: String,
    json: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    match ctx.hash {
        HashAlgorithm::Keccak256 => {
            prove::<Keccak256Hasher>(ctx, &value, json, output.as_deref())
        },
        HashAlgorithm::Sha256 => prove::<Sha256Hasher>(ctx, &value, json, output.as_deref()),
    }
}

fn prove<H: MerkleHasher>(
    ctx: &CliContext,
    value: &str,
    json: bool,
    output: Option<&Path>,
) -> Result<()> {
    let (_, tree) = load_tree::<H>(ctx)?;

    let document = match ProofDocument::generate(&tree, value, ctx.encoding) {
        Ok(document) => document,
        Err(err) if err.is_not_found() => {
            if !json {
                println!("{} {} is not whitelisted", "✗".red(), value.bold());
            }
            return Err(anyhow!(err).context(format!("{} is not whitelisted", value)));
        },
        Err(err) => return Err(err.into()),
    };

    if let Some(path) = output {
        std::fs::write(path, document.to_json()?)
            .with_context(|| format!("Failed to write proof to {}", path.display()))?;
        if !ctx.quiet && !json {
            println!(
                "  • Proof written to: {}",
                path.display().to_string().cyan()
            );
        }
    }

    if json {
        println!("{}", document.to_json()?);
        return Ok(());
    }

    if ctx.quiet {
        println!("{}", document.proof.to_hex_vec().join(","));
        return Ok(());
    }

    println!("root : {}", document.root.to_string().cyan());
    println!("proof : {}", document.proof.to_hex_vec().join(","));

    if ctx.verbose {
        println!();
        println!("{}", "Proof Details:".bold());
        println!("  • Value: {}", document.value);
        println!("  • Leaf: {}", document.leaf);
        println!("  • Hash: {}", document.hash_algorithm);
        println!("  • Encoding: {}", document.encoding);
        println!("  • Siblings: {}", document.proof.len());
        for (level, element) in document.proof.elements().iter().enumerate() {
            let side = match element.position {
                ProofPosition::Left => "left",
                ProofPosition::Right => "right",
            };
            println!("    {} {} ({})", level, element.hash, side.dimmed());
        }
    }

    Ok(())
}
