//! Whitelist loading
//!
//! Reads the address list a tree is built from. The tree itself only needs an
//! ordered sequence of raw values; this module is where those values come
//! from when they live in a file.

pub mod list;
pub mod parser;

// Re-export commonly used items
pub use list::{InvalidEntryPolicy, SkippedEntry, Whitelist};
pub use parser::{RawEntry, WhitelistFormat};
