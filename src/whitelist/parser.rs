//! Whitelist file parser
//!
//! Two on-disk formats are understood:
//!
//! - JSON (`.json`): an array of records with an `address` field (other fields
//!   are ignored), or an array of plain strings
//! - Text (anything else): one value per line, blank lines and `#` comments
//!   skipped

use crate::core::error::{MerkleError, Result};
use serde::Deserialize;
use std::path::Path;

/// On-disk whitelist format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitelistFormat {
    Json,
    Text,
}

impl WhitelistFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => WhitelistFormat::Json,
            _ => WhitelistFormat::Text,
        }
    }
}

/// A raw value read from a whitelist file, with its 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Array index + 1 for JSON, line number for text
    pub position: usize,
    pub value: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonEntry {
    Plain(String),
    Record { address: String },
}

impl JsonEntry {
    fn into_value(self) -> String {
        match self {
            JsonEntry::Plain(value) => value,
            JsonEntry::Record { address } => address,
        }
    }
}

/// Parse whitelist content in the given format
pub fn parse_content(content: &str, format: WhitelistFormat, path: &Path) -> Result<Vec<RawEntry>> {
    match format {
        WhitelistFormat::Json => parse_json(content, path),
        WhitelistFormat::Text => Ok(parse_text(content)),
    }
}

/// Parse a JSON whitelist
pub fn parse_json(content: &str, path: &Path) -> Result<Vec<RawEntry>> {
    let entries: Vec<JsonEntry> = serde_json::from_str(content).map_err(|e| {
        MerkleError::unsupported_format(
            path.to_path_buf(),
            format!(
                "expected an array of strings or {{\"address\": ...}} records ({})",
                e
            ),
        )
    })?;

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| RawEntry {
            position: index + 1,
            value: entry.into_value(),
        })
        .collect())
}

/// Parse a newline-delimited whitelist
pub fn parse_text(content: &str) -> Vec<RawEntry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_num, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some(RawEntry {
                    position: line_num + 1,
                    value: trimmed.to_string(),
                })
            }
        })
        .collect()
}
