use std::path::Path;

use crate::core::git::{self, INITIAL_COMMIT_MESSAGE};
use crate::utils::cmd::GitRunner;
use crate::utils::error::BootstrapResult;
use crate::utils::logger;
use crate::utils::StyleMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStatus {
    NoChanges,
    /// Changes were staged but history already exists, nothing was committed.
    AlreadyHasCommits,
    Created,
}

pub fn make_initial_commit(
    git: &impl GitRunner,
    path: impl AsRef<Path>,
) -> BootstrapResult<CommitStatus> {
    let path = path.as_ref();

    if !git::has_uncommitted_changes(git, path)? {
        logger::info(StyleMessage::no_changes());
        return Ok(CommitStatus::NoChanges);
    }

    git::stage_all(git, path)?;

    if git::has_head_commit(git, path) {
        logger::info(StyleMessage::already_has_commits());
        logger::info(StyleMessage::changes_left_staged());
        return Ok(CommitStatus::AlreadyHasCommits);
    }

    git::commit(git, path, INITIAL_COMMIT_MESSAGE)?;
    logger::info(StyleMessage::commit_created());
    Ok(CommitStatus::Created)
}
