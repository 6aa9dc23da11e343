//! CLI context holding global options resolved against the configuration file

use crate::cli::Cli;
use crate::config::GlobalConfig;
use crate::core::{encoding::LeafEncoding, hash::HashAlgorithm};
use crate::whitelist::{InvalidEntryPolicy, Whitelist};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

/// Settings every command runs with
///
/// Command-line flags win over the configuration file, which wins over the
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub whitelist: Option<PathBuf>,
    pub hash: HashAlgorithm,
    pub encoding: LeafEncoding,
    pub policy: InvalidEntryPolicy,
    /// Config file in use, if one was given explicitly
    pub config_path: Option<PathBuf>,
    pub verbose: bool,
    pub quiet: bool,
}

impl CliContext {
    /// Merge command-line flags with the configuration file
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => GlobalConfig::load_from(path),
            None => GlobalConfig::load(),
        }
        .context("Failed to load configuration")?;

        Ok(Self::from_parts(cli, &config))
    }

    fn from_parts(cli: &Cli, config: &GlobalConfig) -> Self {
        let policy = if cli.skip_invalid {
            InvalidEntryPolicy::Skip
        } else {
            config.invalid_entry_policy()
        };

        let context = Self {
            whitelist: cli
                .whitelist
                .clone()
                .or_else(|| config.whitelist.path.clone()),
            hash: cli.hash.unwrap_or_else(|| config.hash_algorithm()),
            encoding: cli.encoding.unwrap_or_else(|| config.leaf_encoding()),
            policy,
            config_path: cli.config.clone(),
            verbose: cli.verbose,
            quiet: cli.quiet,
        };
        debug!(?context, "resolved cli context");
        context
    }

    /// Load the configured whitelist
    pub fn load_whitelist(&self) -> Result<Whitelist> {
        let path = self.whitelist.as_ref().ok_or_else(|| {
            anyhow::anyhow!(
                "No whitelist given. Pass --whitelist <PATH> or run \
                 'merkle-whitelist config whitelist.path <PATH>'"
            )
        })?;

        Whitelist::load(path, self.encoding, self.policy)
            .with_context(|| format!("Failed to load whitelist {}", path.display()))
    }

    /// Load the configuration file this context was resolved from
    pub fn load_config(&self) -> Result<(GlobalConfig, PathBuf)> {
        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => GlobalConfig::get_config_path()?,
        };
        let config = GlobalConfig::load_from(&path)?;
        Ok((config, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "merkle-whitelist",
            "--hash",
            "sha256",
            "--skip-invalid",
            "-w",
            "cli.json",
            "root",
        ]);
        let mut config = GlobalConfig::default();
        config.tree.hash = Some(HashAlgorithm::Keccak256);
        config.tree.encoding = Some(LeafEncoding::Hex);
        config.whitelist.path = Some(PathBuf::from("config.json"));

        let context = CliContext::from_parts(&cli, &config);
        assert_eq!(context.hash, HashAlgorithm::Sha256);
        assert_eq!(context.encoding, LeafEncoding::Hex);
        assert_eq!(context.policy, InvalidEntryPolicy::Skip);
        assert_eq!(context.whitelist, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_defaults_without_config() {
        let cli = Cli::parse_from(["merkle-whitelist", "tree"]);
        let context = CliContext::from_parts(&cli, &GlobalConfig::default());
        assert_eq!(context.hash, HashAlgorithm::Keccak256);
        assert_eq!(context.encoding, LeafEncoding::Address);
        assert_eq!(context.policy, InvalidEntryPolicy::Reject);
        assert!(context.load_whitelist().is_err());
    }
}
