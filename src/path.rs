//! # Path Resolution
//!
//! This module maps the user-facing inputs (mirror root, group name,
//! repository URL) to the on-disk layout `mirrorRoot/groupName/repoDirName`.
//!
//! Both values that end up as path segments are validated here:
//!
//! - **`GroupName`**: a newtype over a string restricted to `[A-Za-z0-9_-]`.
//!   Invalid input is rejected with an error rather than silently stripped,
//!   so the name that reaches the filesystem is exactly the name the user
//!   supplied.
//! - **`repo_dir_name`**: the basename of a repository URL with any trailing
//!   `.git` suffix removed. Derivations that would be empty or act as a
//!   traversal segment (`.`, `..`, embedded separators) are rejected, which
//!   confines every mirror to its group directory.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Error, Result};

/// A validated repository group name, safe to use as a path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupName(String);

impl GroupName {
    /// Validate a raw group name against the allow-list `[A-Za-z0-9_-]+`.
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::InvalidGroupName {
                name: raw.to_string(),
                message: "name is empty".to_string(),
            });
        }

        if let Some(bad) = raw
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_' && *c != '-')
        {
            return Err(Error::InvalidGroupName {
                name: raw.to_string(),
                message: format!(
                    "contains disallowed character {:?} (allowed: letters, digits, '_', '-')",
                    bad
                ),
            });
        }

        Ok(Self(raw.to_string()))
    }

    /// The validated name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the local directory name for a repository URL.
///
/// Takes the substring after the final path separator and removes any
/// trailing `.git` suffix, so `https://host/org/foo.git` and
/// `https://host/org/foo` both resolve to `foo`. Proper URLs are parsed with
/// the `url` crate; scp-style remotes (`git@host:org/repo.git`) and plain
/// paths fall back to splitting on `/`.
pub fn repo_dir_name(url: &str) -> Result<String> {
    let basename = match Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
            .unwrap_or_default()
            .to_string(),
        // Not an RFC 3986 URL: scp-style remote or a local path
        Err(_) => {
            let trimmed = url.trim_end_matches('/');
            trimmed.rsplit('/').next().unwrap_or(trimmed).to_string()
        }
    };

    let name = basename.strip_suffix(".git").unwrap_or(&basename);

    if name.is_empty() {
        return Err(Error::RepoDirName {
            url: url.to_string(),
            message: "URL has no usable basename".to_string(),
        });
    }
    if name == "." || name == ".." {
        return Err(Error::RepoDirName {
            url: url.to_string(),
            message: format!("basename {:?} is not a valid directory name", name),
        });
    }
    if name.contains(['/', '\\']) {
        return Err(Error::RepoDirName {
            url: url.to_string(),
            message: "basename contains a path separator".to_string(),
        });
    }

    Ok(name.to_string())
}

/// The directory holding all repositories of a group: `mirrorRoot/groupName`.
pub fn group_dir(mirror_root: &Path, group: &GroupName) -> PathBuf {
    mirror_root.join(group.as_str())
}

/// The mirror location of a single repository: `groupDir/repoDirName`.
pub fn target_path(group_dir: &Path, dir_name: &str) -> PathBuf {
    group_dir.join(dir_name)
}
