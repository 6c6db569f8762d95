//! Shared test utilities for the CLI end-to-end tests.
//!
//! Provides a fixture that lays out a mirror root and local upstream git
//! repositories inside one temporary directory, so tests can exercise real
//! clone and pull operations without any network access.

use std::path::{Path, PathBuf};
use std::process::Command;

use assert_fs::prelude::*;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use predicates::prelude::*;

    pub use super::MirrorFixture;
}

/// Run git in `dir`, panicking on failure: tests depend on these setup steps.
#[allow(dead_code)]
fn run_git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("failed to spawn git");
    assert!(status.success(), "git {:?} failed in {}", args, dir.display());
}

/// A temporary mirror layout with local upstream repositories.
///
/// ```text
/// <temp>/
///   mirror/        the mirror root passed via -m
///   upstreams/     local git repositories acting as remotes
///   mirror.list    the configuration file passed via -c
/// ```
pub struct MirrorFixture {
    temp_dir: assert_fs::TempDir,
}

impl MirrorFixture {
    /// Create the fixture with an existing, empty mirror root.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("mirror")
            .create_dir_all()
            .expect("Failed to create mirror root");
        Self { temp_dir }
    }

    /// The mirror root directory (exists).
    pub fn mirror_root(&self) -> PathBuf {
        self.temp_dir.path().join("mirror")
    }

    /// The configuration file path (may not exist yet).
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("mirror.list")
    }

    /// Create a local upstream repository with one initial commit.
    ///
    /// The directory name is used verbatim, so a name like `foo.git`
    /// exercises suffix stripping with a real clone.
    #[allow(dead_code)]
    pub fn add_upstream(&self, name: &str) -> PathBuf {
        let upstream = self.temp_dir.path().join("upstreams").join(name);
        std::fs::create_dir_all(&upstream).expect("Failed to create upstream directory");
        run_git(&upstream, &["init", "--quiet"]);
        run_git(&upstream, &["config", "user.email", "mirror@localhost"]);
        run_git(&upstream, &["config", "user.name", "mirror"]);
        std::fs::write(upstream.join("README.md"), format!("# {}\n", name))
            .expect("Failed to write README");
        run_git(&upstream, &["add", "."]);
        run_git(&upstream, &["commit", "--quiet", "-m", "initial"]);
        upstream
    }

    /// Commit a new file to an existing upstream repository.
    #[allow(dead_code)]
    pub fn commit_file(&self, upstream: &Path, file: &str, content: &str) {
        std::fs::write(upstream.join(file), content).expect("Failed to write file");
        run_git(upstream, &["add", "."]);
        run_git(upstream, &["commit", "--quiet", "-m", "update"]);
    }

    /// Write the configuration file from raw lines (joined with newlines).
    pub fn write_config(&self, lines: &[&str]) {
        std::fs::write(self.config_path(), lines.join("\n") + "\n")
            .expect("Failed to write config file");
    }

    /// A command for the binary with `-m`/`-c` preset and color disabled,
    /// so assertions see the plain `[OK]`/`[FAIL]` tags.
    pub fn command(&self, group: &str) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("repo-mirror");
        cmd.env("NO_COLOR", "1")
            .arg("-m")
            .arg(self.mirror_root())
            .arg("-r")
            .arg(group)
            .arg("-c")
            .arg(self.config_path());
        cmd
    }

    /// Path of one mirrored repository: `mirror/<group>/<name>`.
    #[allow(dead_code)]
    pub fn mirror_path(&self, group: &str, name: &str) -> PathBuf {
        self.mirror_root().join(group).join(name)
    }
}

impl Default for MirrorFixture {
    fn default() -> Self {
        Self::new()
    }
}
