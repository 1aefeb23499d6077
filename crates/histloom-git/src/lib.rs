//! Git adapter for the history store boundary.
//!
//! This crate is intentionally thin: it shells out to `git` for every
//! operation and keeps no synthesis policy. All commits are empty
//! (`--allow-empty`); the synthesized repository carries history, not
//! content.

use chrono::{DateTime, Utc};
use histloom_synth::{HistoryStore, ROOT_TIMELINE, StoreError};
use std::path::{Path, PathBuf};
use std::process::Command;

const COMMIT_USER_NAME: &str = "ActivityBot";
const COMMIT_USER_EMAIL: &str = "bot@example.com";
const ROOT_MESSAGE: &str = "Init History";

/// Errors from interacting with the git CLI.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("git executable is not available in PATH")]
    NotInstalled,

    #[error("git command failed: git {args} ({message})")]
    CommandFailed { args: String, message: String },

    #[error("unable to prepare output directory {path}: {message}")]
    Output { path: String, message: String },
}

impl From<GitError> for StoreError {
    fn from(err: GitError) -> Self {
        StoreError::new(err.to_string())
    }
}

/// History store backed by a git repository on disk.
///
/// The repository is mutated exclusively by this process for the
/// duration of a run; the adapter is not safe for concurrent writers.
#[derive(Debug)]
pub struct GitStore {
    repo_root: PathBuf,
}

impl GitStore {
    /// Returns true if `git` is available in PATH.
    pub fn is_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Create a fresh repository at `path`, replacing anything already
    /// there, and configure the committer identity for the run.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let repo_root = path.as_ref().to_path_buf();

        if repo_root.exists() {
            std::fs::remove_dir_all(&repo_root).map_err(|e| GitError::Output {
                path: repo_root.display().to_string(),
                message: e.to_string(),
            })?;
        }
        std::fs::create_dir_all(&repo_root).map_err(|e| GitError::Output {
            path: repo_root.display().to_string(),
            message: e.to_string(),
        })?;

        let store = Self { repo_root };
        store.run(&["init"])?;
        store.run(&["config", "user.email", COMMIT_USER_EMAIL])?;
        store.run(&["config", "user.name", COMMIT_USER_NAME])?;
        tracing::debug!(path = %store.repo_root.display(), "initialized output repository");
        Ok(store)
    }

    /// Filesystem path of the output repository.
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        run_git(&self.repo_root, args, None)
    }

    fn run_dated(&self, args: &[&str], stamp: &str) -> Result<String, GitError> {
        run_git(&self.repo_root, args, Some(stamp))
    }
}

impl HistoryStore for GitStore {
    fn init_root(&mut self, at: DateTime<Utc>) -> Result<(), StoreError> {
        let stamp = at.to_rfc3339();
        self.run_dated(
            &["commit", "--allow-empty", "-m", ROOT_MESSAGE, "--date", &stamp],
            &stamp,
        )?;
        // Default branch name varies across git versions; pin it.
        self.run(&["branch", "-M", ROOT_TIMELINE])?;
        Ok(())
    }

    fn create_timeline(&mut self, name: &str, base: &str) -> Result<(), StoreError> {
        self.run(&["checkout", "-b", name, base])?;
        Ok(())
    }

    fn switch_timeline(&mut self, name: &str) -> Result<(), StoreError> {
        self.run(&["checkout", name])?;
        Ok(())
    }

    fn record_change(
        &mut self,
        message: &str,
        authored_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let stamp = authored_at.to_rfc3339();
        self.run_dated(&["commit", "--allow-empty", "-m", message], &stamp)?;
        Ok(())
    }

    fn merge_timelines(&mut self, names: &[String]) -> Result<(), StoreError> {
        let mut args = vec!["merge", "--no-edit"];
        args.extend(names.iter().map(String::as_str));
        self.run(&args)?;
        Ok(())
    }
}

fn run_git(cwd: &Path, args: &[&str], date_stamp: Option<&str>) -> Result<String, GitError> {
    let mut command = Command::new("git");
    command.args(args).current_dir(cwd);
    if let Some(stamp) = date_stamp {
        command
            .env("GIT_AUTHOR_DATE", stamp)
            .env("GIT_COMMITTER_DATE", stamp);
    }

    let output = command.output().map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            GitError::NotInstalled
        } else {
            GitError::CommandFailed {
                args: args.join(" "),
                message: err.to_string(),
            }
        }
    })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            "unknown error".to_string()
        } else {
            stderr
        };
        Err(GitError::CommandFailed {
            args: args.join(" "),
            message,
        })
    }
}
