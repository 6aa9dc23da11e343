//! Canonical byte encodings for raw leaf values
//!
//! Every value is turned into bytes before it is hashed into a leaf. The same
//! encoding must be used when building a tree, generating a proof and
//! verifying it, otherwise the leaf hashes will not line up.

use crate::core::error::{MerkleError, Result};
use crate::core::types::strip_hex_prefix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of bytes in an account address
pub const ADDRESS_LEN: usize = 20;

/// How a raw string value is converted to bytes before hashing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LeafEncoding {
    /// `0x` followed by exactly 40 hex digits, decoded to 20 bytes
    #[default]
    Address,
    /// `0x`-prefixed hex of any length, decoded to bytes
    Hex,
    /// Raw UTF-8 bytes of the value
    Utf8,
}

impl LeafEncoding {
    /// Convert a raw value to its canonical bytes
    pub fn canonicalize(self, value: &str) -> Result<Vec<u8>> {
        match self {
            LeafEncoding::Address => canonicalize_address(value),
            LeafEncoding::Hex => canonicalize_hex(value),
            LeafEncoding::Utf8 => Ok(value.as_bytes().to_vec()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LeafEncoding::Address => "address",
            LeafEncoding::Hex => "hex",
            LeafEncoding::Utf8 => "utf8",
        }
    }
}

fn canonicalize_address(value: &str) -> Result<Vec<u8>> {
    let trimmed = value.trim();
    let digits = strip_hex_prefix(trimmed)
        .ok_or_else(|| MerkleError::invalid_input(value, "address must start with 0x"))?;

    if digits.len() != ADDRESS_LEN * 2 {
        return Err(MerkleError::invalid_input(
            value,
            format!(
                "address must have {} hex digits, got {}",
                ADDRESS_LEN * 2,
                digits.len()
            ),
        ));
    }

    hex::decode(digits).map_err(|e| MerkleError::invalid_input(value, e.to_string()))
}

fn canonicalize_hex(value: &str) -> Result<Vec<u8>> {
    let trimmed = value.trim();
    let digits = strip_hex_prefix(trimmed)
        .ok_or_else(|| MerkleError::invalid_input(value, "hex value must start with 0x"))?;

    // Odd digit counts are padded on the left, so 0xabc decodes as 0x0abc
    let decoded = if digits.len() % 2 == 1 {
        hex::decode(format!("0{}", digits))
    } else {
        hex::decode(digits)
    };

    decoded.map_err(|e| MerkleError::invalid_input(value, e.to_string()))
}

impl fmt::Display for LeafEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeafEncoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "address" => Ok(LeafEncoding::Address),
            "hex" => Ok(LeafEncoding::Hex),
            "utf8" | "utf-8" => Ok(LeafEncoding::Utf8),
            other => Err(format!(
                "unknown leaf encoding '{}', expected address, hex or utf8",
                other
            )),
        }
    }
}
