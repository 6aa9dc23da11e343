use crate::cli::commands::parse_hash;
use crate::cli::CliContext;
use crate::core::{
    hash::{HashAlgorithm, Keccak256Hasher, Sha256Hasher},
    types::Hash,
};
use crate::proofs::{verify_leaf, ProofDocument};
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use serde_json::json;
use std::path::{Path, PathBuf};

/// Result of checking one proof
struct Verification {
    valid: bool,
    reason: Option<String>,
    value: String,
    leaf: Hash,
    root: Hash,
    hash: HashAlgorithm,
    siblings: usize,
}

/// Execute the verify command
pub fn execute(
    ctx: &CliContext,
    value: Option<String>,
    root: Option<String>,
    siblings: Vec<String>,
    proof: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let verification = match &proof {
        Some(path) => verify_document(path, value.as_deref(), root.as_deref())?,
        None => {
            let value = value
                .ok_or_else(|| anyhow!("A value to verify is required unless --proof is given"))?;
            let root =
                root.ok_or_else(|| anyhow!("--root is required unless --proof is given"))?;
            verify_siblings(ctx, value, &root, &siblings)?
        },
    };

    report(ctx, &verification, json)
}

fn verify_document(
    path: &Path,
    expected_value: Option<&str>,
    expected_root: Option<&str>,
) -> Result<Verification> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read proof {}", path.display()))?;
    let document = ProofDocument::from_json(&content)?;

    let mut verification = Verification {
        valid: document.verify()?,
        reason: None,
        value: document.value.clone(),
        leaf: document.leaf,
        root: document.root,
        hash: document.hash_algorithm,
        siblings: document.proof.len(),
    };
    if !verification.valid {
        verification.reason = Some("proof does not lead to the root".to_string());
    }

    if let Some(expected) = expected_root {
        if parse_hash(expected)? != document.root {
            verification.valid = false;
            verification.reason = Some(format!("root mismatch, proof is for {}", document.root));
        }
    }

    if let Some(expected) = expected_value {
        let leaf = document
            .hash_algorithm
            .digest(&document.encoding.canonicalize(expected)?);
        if leaf != document.leaf {
            verification.valid = false;
            verification.reason = Some(format!("proof is for {}", document.value));
        }
    }

    Ok(verification)
}

fn verify_siblings(
    ctx: &CliContext,
    value: String,
    root: &str,
    siblings: &[String],
) -> Result<Verification> {
    let root = parse_hash(root)?;
    let siblings = siblings
        .iter()
        .map(|sibling| parse_hash(sibling))
        .collect::<Result<Vec<_>>>()?;

    let leaf = ctx.hash.digest(&ctx.encoding.canonicalize(&value)?);

    let valid = match ctx.hash {
        HashAlgorithm::Keccak256 => verify_leaf::<Keccak256Hasher>(&root, &leaf, &siblings),
        HashAlgorithm::Sha256 => verify_leaf::<Sha256Hasher>(&root, &leaf, &siblings),
    };

    Ok(Verification {
        valid,
        reason: (!valid).then(|| "proof does not lead to the root".to_string()),
        value,
        leaf,
        root,
        hash: ctx.hash,
        siblings: siblings.len(),
    })
}

fn report(ctx: &CliContext, verification: &Verification, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "valid": verification.valid,
            "reason": verification.reason,
            "value": verification.value,
            "leaf": verification.leaf,
            "root": verification.root,
            "hash": verification.hash,
            "siblings": verification.siblings,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if verification.valid {
        if !ctx.quiet {
            println!("{}", "✓ Proof is valid".green());
        }
    } else {
        println!("{}", "✗ Proof is invalid".red());
    }

    if ctx.verbose && !json {
        println!();
        println!("{}", "Verification Details:".bold());
        println!("  • Value: {}", verification.value);
        println!("  • Leaf: {}", verification.leaf);
        println!("  • Root: {}", verification.root);
        println!("  • Hash: {}", verification.hash);
        println!("  • Siblings: {}", verification.siblings);
        if let Some(reason) = &verification.reason {
            println!("  • Reason: {}", reason.red());
        }
    }

    if verification.valid {
        Ok(())
    } else {
        Err(anyhow!(
            "Proof verification failed: {}",
            verification
                .reason
                .as_deref()
                .unwrap_or("proof does not lead to the root")
        ))
    }
}
