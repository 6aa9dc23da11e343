//! Configuration command implementation

use crate::cli::CliContext;
use crate::config::{ConfigKey, GlobalConfig};
use anyhow::{anyhow, Result};
use colored::Colorize;
use std::path::Path;

/// Execute the config command
pub fn execute(
    ctx: &CliContext,
    key: Option<String>,
    value: Option<String>,
    list: bool,
    unset: bool,
    show_origin: bool,
    json: bool,
) -> Result<()> {
    let (mut config, config_path) = ctx.load_config()?;

    if show_origin {
        return show_config_origin(&config_path, json);
    }

    let key_str = match key {
        Some(key_str) if !list => key_str,
        _ => return list_configuration(&config, json),
    };

    let config_key = ConfigKey::parse(&key_str)
        .ok_or_else(|| anyhow!("Invalid configuration key: {}", key_str))?;

    if unset {
        config.unset(config_key);
        config.save_to(&config_path)?;

        if json {
            println!(
                "{}",
                serde_json::json!({ "action": "unset", "key": key_str, "status": "success" })
            );
        } else {
            println!("{} {}", "✓".green(), format!("Unset {}", key_str).bold());
        }
    } else if let Some(value_str) = value {
        config.set(config_key, &value_str)?;
        config.save_to(&config_path)?;

        if json {
            println!(
                "{}",
                serde_json::json!({
                    "action": "set",
                    "key": key_str,
                    "value": value_str,
                    "status": "success"
                })
            );
        } else {
            println!("{} {} = {}", "✓".green(), key_str.bold(), value_str.cyan());
        }
    } else {
        let current = config.get(config_key);
        if json {
            println!(
                "{}",
                serde_json::json!({ "key": key_str, "value": current })
            );
        } else {
            match current {
                Some(value_str) => println!("{}", value_str),
                None => println!("{}", format!("{} is not set", key_str).yellow()),
            }
        }
    }

    Ok(())
}

fn show_config_origin(config_path: &Path, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "config_file": config_path.display().to_string(),
                "exists": config_path.exists()
            })
        );
    } else {
        println!(
            "{}: {}",
            "Configuration file".bold(),
            config_path.display().to_string().cyan()
        );
        if config_path.exists() {
            println!("{}: {}", "Status".bold(), "exists".green());
        } else {
            println!("{}: {}", "Status".bold(), "not created yet".yellow());
        }
    }
    Ok(())
}

fn list_configuration(config: &GlobalConfig, json: bool) -> Result<()> {
    let entries = config.list();

    if json {
        let map: serde_json::Map<String, serde_json::Value> = entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), serde_json::Value::String(value)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "No configuration values set".yellow());
        println!(
            "  {} Use 'merkle-whitelist config <key> <value>' to set one",
            "→".cyan()
        );
        return Ok(());
    }

    for (key, value) in entries {
        println!("{} = {}", key.bold(), value.cyan());
    }
    Ok(())
}
