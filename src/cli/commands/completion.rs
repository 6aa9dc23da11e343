use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "merkle-whitelist";

/// Generate shell completion scripts
///
/// The script goes to stdout untouched so it can be piped or sourced.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, &mut io::stdout());
    Ok(())
}
