use std::path::Path;

use crate::core::git;
use crate::utils::cmd::GitRunner;
use crate::utils::error::BootstrapResult;
use crate::utils::logger;
use crate::utils::StyleMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryStatus {
    Existing,
    Initialized,
}

pub fn ensure_repository(
    git: &impl GitRunner,
    path: impl AsRef<Path>,
) -> BootstrapResult<RepositoryStatus> {
    let path = path.as_ref();

    if git::is_repository(git, path) {
        logger::info(StyleMessage::already_repository());
        logger::info(StyleMessage::skip_init());
        return Ok(RepositoryStatus::Existing);
    }

    logger::info(StyleMessage::initializing());
    git::init(git, path)?;
    logger::info(StyleMessage::repo_initialized());
    Ok(RepositoryStatus::Initialized)
}
