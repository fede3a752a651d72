use std::path::Path;

use crate::utils::cmd::GitRunner;
use crate::utils::error::{BootstrapError, BootstrapResult};

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Whether `path` is already under version control.
///
/// Asks git first, so worktrees and submodules whose `.git` is a pointer
/// file are recognized. Falls back to looking for a `.git` entry when the
/// query fails.
pub fn is_repository(git: &impl GitRunner, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    if !path.is_dir() {
        return false;
    }

    if let Ok(output) = git.exec(path, &["rev-parse", "--git-dir"]) {
        if !output.is_empty() {
            return true;
        }
    }

    path.join(".git").exists()
}

pub fn init(git: &impl GitRunner, path: impl AsRef<Path>) -> BootstrapResult {
    git.exec(path.as_ref(), &["init"])
        .map(|_| ())
        .map_err(|e| BootstrapError::InitFailed(Box::new(e)))
}

/// Reads a global config value, `None` if unset or empty.
pub fn get_global_config(
    git: &impl GitRunner,
    path: impl AsRef<Path>,
    key: &str,
) -> Option<String> {
    match git.exec(path.as_ref(), &["config", "--global", key]) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

pub fn set_global_config(
    git: &impl GitRunner,
    path: impl AsRef<Path>,
    key: &str,
    value: &str,
) -> BootstrapResult {
    git.exec(path.as_ref(), &["config", "--global", key, value])
        .map(|_| ())
        .map_err(|e| BootstrapError::SetConfigFailed {
            key: key.to_string(),
            source: Box::new(e),
        })
}

pub fn has_uncommitted_changes(git: &impl GitRunner, path: impl AsRef<Path>) -> BootstrapResult<bool> {
    git.exec(path.as_ref(), &["status", "--porcelain"])
        .map(|output| !output.is_empty())
        .map_err(|e| BootstrapError::StatusFailed(Box::new(e)))
}

pub fn stage_all(git: &impl GitRunner, path: impl AsRef<Path>) -> BootstrapResult {
    git.exec(path.as_ref(), &["add", "."])
        .map(|_| ())
        .map_err(|e| BootstrapError::StageFailed(Box::new(e)))
}

pub fn has_head_commit(git: &impl GitRunner, path: impl AsRef<Path>) -> bool {
    git.exec(path.as_ref(), &["rev-parse", "--verify", "HEAD"])
        .is_ok()
}

pub fn commit(git: &impl GitRunner, path: impl AsRef<Path>, message: &str) -> BootstrapResult {
    git.exec(path.as_ref(), &["commit", "-m", message])
        .map(|_| ())
        .map_err(|e| BootstrapError::CommitFailed(Box::new(e)))
}
