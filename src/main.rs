//! merkle-whitelist CLI
//!
//! Command-line interface for building whitelist Merkle trees and proving membership.

use anyhow::Result;
use clap::Parser;
use merkle_whitelist::cli::{self, Cli, CliContext, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over -v/-q
    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Commands::Completion { shell } = cli.command {
        return cli::commands::completion::execute(shell);
    }

    let ctx = CliContext::resolve(&cli)?;

    // Execute the command
    match cli.command {
        Commands::Root { json } => cli::commands::root::execute(&ctx, json),
        Commands::Prove {
            value,
            json,
            output,
        } => cli::commands::prove::execute(&ctx, value, json, output),
        Commands::Verify {
            value,
            root,
            siblings,
            proof,
            json,
        } => cli::commands::verify::execute(&ctx, value, root, siblings, proof, json),
        Commands::Tree { json } => cli::commands::tree::execute(&ctx, json),
        Commands::Config {
            key,
            value,
            list,
            unset,
            show_origin,
            json,
        } => cli::commands::config::execute(&ctx, key, value, list, unset, show_origin, json),
        Commands::Completion { shell } => cli::commands::completion::execute(shell),
    }
}
