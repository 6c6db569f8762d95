//! CLI argument parsing and run orchestration
//!
//! Precondition checks run eagerly, before any sync work: the git binary
//! must be present, the mirror root must be an existing absolute directory,
//! the group name must validate, and the configuration must be readable. Any
//! of these failing aborts the process with exit code 1. Per-repository sync
//! failures never do; they are reported and, only under `--strict`, reflected
//! in the exit code.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use repo_mirror::config;
use repo_mirror::error::Error;
use repo_mirror::git;
use repo_mirror::output::{emoji, init_logging, OutputConfig};
use repo_mirror::path::{self, GroupName};
use repo_mirror::sync::{SyncAction, SyncEngine};

/// Mirror a configured set of git repositories to local disk
#[derive(Parser, Debug)]
#[command(name = "repo-mirror")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Absolute mirror root under which repository groups are stored
    /// (defaults to the current working directory)
    #[arg(short = 'm', long = "mirror-root", value_name = "DIR")]
    mirror_root: Option<PathBuf>,

    /// Repository group name; letters, digits, '_' and '-' only
    #[arg(short = 'r', long = "group", value_name = "NAME")]
    group: String,

    /// Configuration file listing repository URLs, whitespace-delimited
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: PathBuf,

    /// Exit non-zero if any repository failed to sync
    #[arg(long)]
    strict: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: log::LevelFilter,
}

impl Cli {
    /// Execute one mirror run.
    pub fn execute(self) -> Result<()> {
        let out = OutputConfig::from_env_and_flag(&self.color);
        init_logging(self.log_level, &out);

        // Fail fast on preconditions before touching the filesystem.
        git::ensure_available()?;

        let mirror_root = match self.mirror_root {
            Some(dir) => dir,
            None => env::current_dir().context("cannot determine current working directory")?,
        };
        validate_mirror_root(&mirror_root)?;

        let group = GroupName::new(&self.group)?;
        let entries = config::load(&self.config)?;

        let group_dir = path::group_dir(&mirror_root, &group);
        fs::create_dir_all(&group_dir)
            .with_context(|| format!("cannot create group directory {}", group_dir.display()))?;

        info!(
            "syncing {} repositories into {}",
            entries.len(),
            group_dir.display()
        );

        let report = SyncEngine::new().sync(&group_dir, &entries);

        for outcome in report.outcomes() {
            match &outcome.result {
                Ok(SyncAction::Cloned) => {
                    println!("{} cloned  {}", emoji(&out, "✅", "[OK]"), outcome.url);
                }
                Ok(SyncAction::Updated) => {
                    println!("{} updated {}", emoji(&out, "✅", "[OK]"), outcome.url);
                }
                Err(e) => {
                    println!("{} {}: {}", emoji(&out, "❌", "[FAIL]"), outcome.url, e);
                }
            }
        }

        println!(
            "{} {} synced, {} failed",
            emoji(&out, "📦", "[DONE]"),
            report.succeeded(),
            report.failed()
        );

        if self.strict && report.has_failures() {
            bail!(
                "{} of {} repositories failed to sync",
                report.failed(),
                report.len()
            );
        }

        Ok(())
    }
}

/// The mirror root must pre-exist; only subdirectories under it are created.
fn validate_mirror_root(root: &Path) -> Result<(), Error> {
    if !root.is_absolute() {
        return Err(Error::MirrorRoot {
            path: root.to_path_buf(),
            message: "must be an absolute path".to_string(),
        });
    }
    if !root.is_dir() {
        return Err(Error::MirrorRoot {
            path: root.to_path_buf(),
            message: "does not exist or is not a directory".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_mirror_root_accepts_existing_absolute_dir() {
        let temp = TempDir::new().unwrap();
        assert!(validate_mirror_root(temp.path()).is_ok());
    }

    #[test]
    fn test_validate_mirror_root_rejects_relative_path() {
        let err = validate_mirror_root(Path::new("relative/mirror")).unwrap_err();
        assert!(err.to_string().contains("absolute"));
    }

    #[test]
    fn test_validate_mirror_root_rejects_missing_dir() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let err = validate_mirror_root(&missing).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_cli_parses_short_options() {
        let cli = Cli::parse_from([
            "repo-mirror",
            "-m",
            "/srv/mirror",
            "-r",
            "myset",
            "-c",
            "mirror.list",
        ]);
        assert_eq!(cli.mirror_root, Some(PathBuf::from("/srv/mirror")));
        assert_eq!(cli.group, "myset");
        assert_eq!(cli.config, PathBuf::from("mirror.list"));
        assert!(!cli.strict);
    }

    #[test]
    fn test_cli_mirror_root_is_optional() {
        let cli = Cli::parse_from(["repo-mirror", "-r", "myset", "-c", "mirror.list"]);
        assert_eq!(cli.mirror_root, None);
    }
}
