//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `repo-mirror` application. It uses the `thiserror` library to create an
//! `Error` enum covering all anticipated failure modes, providing clear and
//! descriptive error messages.
//!
//! Two classes of failure flow through this type:
//!
//! - **Precondition failures** (missing git binary, bad mirror root, invalid
//!   group name, unreadable configuration): surfaced before any sync work
//!   begins and fatal to the whole run.
//! - **Per-entry sync failures** (clone or pull errors): recorded in the
//!   [`SyncReport`](crate::sync::SyncReport) for the entry they belong to and
//!   never abort the run.
//!
//! The `Result` type alias is used to return `Result<T, Error>` from
//! functions, making it easy to handle errors and propagate them up the
//! call stack.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for repo-mirror operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("Configuration error for {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A group name failed allow-list validation.
    ///
    /// Names are used verbatim as a path segment under the mirror root, so
    /// anything outside `[A-Za-z0-9_-]` is rejected rather than stripped.
    #[error("Invalid group name {name:?}: {message}")]
    InvalidGroupName { name: String, message: String },

    /// A configured URL does not yield a usable repository directory name.
    #[error("Cannot derive a directory name from {url:?}: {message}")]
    RepoDirName { url: String, message: String },

    /// The mirror root is missing, relative, or otherwise unusable.
    #[error("Mirror root error for {}: {message}", path.display())]
    MirrorRoot { path: PathBuf, message: String },

    /// An error occurred while cloning a git repository.
    ///
    /// Includes the repository URL, the captured git output, and an optional
    /// hint for resolution.
    #[error("Git clone error for {url}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// An error occurred while updating an existing mirror.
    #[error("Git pull error in {}: {message}", path.display())]
    GitPull { path: PathBuf, message: String },

    /// A required external tool is missing or not runnable.
    #[error("Tool validation error: {tool} - {message}")]
    ToolValidation { tool: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
