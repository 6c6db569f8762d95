//! # Git Subprocess Wrappers
//!
//! Thin wrappers around the system `git` command for the three operations the
//! mirror needs: a presence check, a full clone, and a pull.
//!
//! Using the system git means authentication is handled exactly as it is for
//! an interactive user:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Personal access tokens
//! - Any authentication configured in ~/.gitconfig
//!
//! Every operation blocks until the subprocess exits; no timeout is imposed
//! beyond whatever the underlying transport enforces.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Verify that the `git` binary is present and runnable.
///
/// Run as a precondition before any sync work starts, so a missing tool fails
/// the whole invocation instead of every entry in turn.
pub fn ensure_available() -> Result<()> {
    let output = Command::new("git")
        .arg("--version")
        .output()
        .map_err(|e| Error::ToolValidation {
            tool: "git".to_string(),
            message: format!("failed to run 'git --version': {}", e),
        })?;

    if !output.status.success() {
        return Err(Error::ToolValidation {
            tool: "git".to_string(),
            message: format!("'git --version' exited with {}", output.status),
        });
    }

    Ok(())
}

/// Clone a repository into `dir_name` under the group directory.
///
/// Executes `git clone <url> <dir_name>` with the working directory set to
/// `group_dir`, mirroring a shell `cd "$group_dir" && git clone ...`.
pub fn clone(url: &str, group_dir: &Path, dir_name: &str) -> Result<()> {
    let output = Command::new("git")
        .args(["clone", url, dir_name])
        .current_dir(group_dir)
        .output()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            message: e.to_string(),
            hint: None,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Provide a helpful hint for common auth failures
        let hint = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            Some(
                "Make sure you have access to the repository: SSH key added to \
                 ssh-agent, git credentials configured, or a personal access \
                 token set up"
                    .to_string(),
            )
        } else {
            None
        };

        return Err(Error::GitClone {
            url: url.to_string(),
            message: stderr.trim().to_string(),
            hint,
        });
    }

    Ok(())
}

/// Update an existing mirror by pulling the currently checked-out branch.
///
/// Executes `git pull` with the working directory set to the mirror. A
/// diverged history that needs manual resolution surfaces here as a failure
/// with git's own explanation in the message.
pub fn pull(repo_dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .arg("pull")
        .current_dir(repo_dir)
        .output()
        .map_err(|e| Error::GitPull {
            path: repo_dir.to_path_buf(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::GitPull {
            path: repo_dir.to_path_buf(),
            message: stderr.trim().to_string(),
        });
    }

    Ok(())
}
