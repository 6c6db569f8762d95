//! # repo-mirror Library
//!
//! This library provides the core functionality for mirroring a configured
//! set of remote git repositories to local disk. It is designed to be used by
//! the `repo-mirror` command-line tool but can also be embedded in other
//! applications that need a clone-or-update loop over a list of repositories.
//!
//! ## Quick Example
//!
//! ```
//! use repo_mirror::path::{self, GroupName};
//!
//! // Validate the group name that becomes a path segment
//! let group = GroupName::new("myset").unwrap();
//! assert_eq!(group.as_str(), "myset");
//!
//! // Derive the local directory name for a repository URL
//! let name = path::repo_dir_name("https://example.com/org/foo.git").unwrap();
//! assert_eq!(name, "foo");
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: loads the whitespace-delimited list of
//!   repository URLs, preserving order and duplicates.
//! - **Path Resolution (`path`)**: maps mirror root, group name, and URL to
//!   the on-disk layout `mirrorRoot/groupName/repoDirName`, validating both
//!   user-supplied segments.
//! - **Git Operations (`git`)**: subprocess wrappers around the system `git`
//!   binary for clone, pull, and the presence check.
//! - **Sync Engine (`sync`)**: the sequential clone-or-update loop. One
//!   failed entry never stops the rest; every outcome is accumulated into a
//!   [`sync::SyncReport`] for the caller to judge.
//!
//! ## Execution Flow
//!
//! The binary validates all preconditions eagerly (git present, mirror root
//! exists, group name valid, configuration readable), creates the group
//! directory on demand, and then invokes the engine exactly once. Sync-time
//! failures are logged and reported but only affect the exit code when the
//! caller opts into strict mode.

pub mod config;
pub mod error;
pub mod git;
pub mod output;
pub mod path;
pub mod sync;
