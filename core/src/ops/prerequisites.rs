use std::path::Path;

use crate::utils::cmd::GitRunner;
use crate::utils::error::{BootstrapError, BootstrapResult};
use crate::utils::logger;
use crate::utils::StyleMessage;

/// Fails with [`BootstrapError::GitNotInstalled`] before looking at the
/// workspace, so a missing git always halts first.
pub fn check_prerequisites(git: &impl GitRunner, path: impl AsRef<Path>) -> BootstrapResult {
    let path = path.as_ref();

    if !git.probe() {
        return Err(BootstrapError::GitNotInstalled);
    }
    logger::info(StyleMessage::git_installed());
    logger::info(StyleMessage::workspace_path(path));

    if !path.is_dir() {
        return Err(BootstrapError::DirNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
