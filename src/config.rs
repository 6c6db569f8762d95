//! # Configuration Loading
//!
//! The configuration file is a plain-text list of repository URLs. The loader
//! splits the entire file content on ASCII whitespace, so blank lines carry
//! no entries and several URLs on one line are several entries. Entry order
//! is file order, and duplicates are kept: the sync loop processes each
//! occurrence independently.
//!
//! There is no persisted catalog; the file is read fresh on every invocation.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// One configured repository: the raw URL string from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    /// The remote repository URL, with or without a trailing `.git`.
    pub url: String,
}

impl RepositoryEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Load the ordered list of repository entries from a configuration file.
pub fn load(path: &Path) -> Result<Vec<RepositoryEntry>> {
    let content = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(content
        .split_whitespace()
        .map(RepositoryEntry::new)
        .collect())
}
