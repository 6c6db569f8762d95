//! # Sync Engine
//!
//! The core of the tool: bring each configured repository's local mirror up
//! to date under the group directory. For every entry, in configuration-file
//! order, the engine derives the target path and either clones (mirror
//! absent) or pulls (mirror present). One entry failing never stops the
//! remaining entries; every outcome is recorded and returned to the caller,
//! which decides what an overall failure means.
//!
//! ## Design
//!
//! Git access goes through the [`GitOperations`] trait so the engine logic
//! can be tested without running real git or touching the network. The
//! production implementation, [`SystemGit`], delegates to the subprocess
//! wrappers in [`crate::git`]; tests inject mocks that record calls and
//! simulate failures.
//!
//! Execution is single-threaded and strictly sequential: each clone or pull
//! blocks until it finishes before the next entry starts.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::RepositoryEntry;
use crate::error::Result;
use crate::path;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Clone `url` into `dir_name` under the group directory.
    fn clone_repo(&self, url: &str, group_dir: &Path, dir_name: &str) -> Result<()>;

    /// Pull the currently checked-out branch of an existing mirror.
    fn pull(&self, repo_dir: &Path) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command to perform real git operations.
pub struct SystemGit;

impl GitOperations for SystemGit {
    fn clone_repo(&self, url: &str, group_dir: &Path, dir_name: &str) -> Result<()> {
        crate::git::clone(url, group_dir, dir_name)
    }

    fn pull(&self, repo_dir: &Path) -> Result<()> {
        crate::git::pull(repo_dir)
    }
}

/// What the engine did for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// The mirror did not exist and was freshly cloned.
    Cloned,
    /// The mirror existed and was updated with a pull.
    Updated,
}

/// The recorded result of processing one configuration entry.
#[derive(Debug)]
pub struct SyncOutcome {
    /// The configured URL, verbatim.
    pub url: String,
    /// The mirror path the entry resolved to, when a name could be derived.
    pub path: Option<PathBuf>,
    /// The action taken, or the error that stopped this entry.
    pub result: Result<SyncAction>,
}

impl SyncOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// All per-entry outcomes of one run, in configuration order.
#[derive(Debug, Default)]
pub struct SyncReport {
    outcomes: Vec<SyncOutcome>,
}

impl SyncReport {
    pub fn outcomes(&self) -> &[SyncOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of entries that cloned or updated successfully.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    /// Number of entries that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

/// Drives the clone-or-update loop over the configured entries.
pub struct SyncEngine {
    git_ops: Box<dyn GitOperations>,
}

impl Default for SyncEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncEngine {
    /// Create an engine backed by the system `git` binary.
    pub fn new() -> Self {
        Self {
            git_ops: Box::new(SystemGit),
        }
    }

    /// Create an engine with a custom `GitOperations` implementation.
    ///
    /// This is primarily used for testing to inject mock operations.
    #[cfg(test)]
    pub fn with_operations(git_ops: Box<dyn GitOperations>) -> Self {
        Self { git_ops }
    }

    /// Mirror every entry into `group_dir`, sequentially, best-effort.
    ///
    /// The group directory must already exist. Returns a report with one
    /// outcome per entry; this method itself never fails.
    pub fn sync(&self, group_dir: &Path, entries: &[RepositoryEntry]) -> SyncReport {
        let mut report = SyncReport::default();

        for entry in entries {
            report.outcomes.push(self.sync_entry(group_dir, entry));
        }

        report
    }

    fn sync_entry(&self, group_dir: &Path, entry: &RepositoryEntry) -> SyncOutcome {
        let dir_name = match path::repo_dir_name(&entry.url) {
            Ok(name) => name,
            Err(e) => {
                warn!("skipping {}: {}", entry.url, e);
                return SyncOutcome {
                    url: entry.url.clone(),
                    path: None,
                    result: Err(e),
                };
            }
        };

        let target = path::target_path(group_dir, &dir_name);

        let result = if target.is_dir() {
            info!("updating {} in {}", entry.url, target.display());
            self.git_ops.pull(&target).map(|_| SyncAction::Updated)
        } else {
            info!("cloning {} into {}", entry.url, target.display());
            self.git_ops
                .clone_repo(&entry.url, group_dir, &dir_name)
                .map(|_| SyncAction::Cloned)
        };

        if let Err(e) = &result {
            warn!("sync failed for {}: {}", entry.url, e);
        }

        SyncOutcome {
            url: entry.url.clone(),
            path: Some(target),
            result,
        }
    }
}
