use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::ops::{
    check_prerequisites, create_ignore_file, ensure_repository, make_initial_commit,
    setup_identity, CommitStatus, IdentityStatus, IgnoreFileStatus, RepositoryStatus,
};
use crate::utils::cmd::GitRunner;
use crate::utils::error::{BootstrapError, BootstrapResult};
use crate::utils::logger;
use crate::utils::StyleMessage;

const TITLE: &str = "Git Workspace Bootstrap";
const TITLE_WIDTH: usize = 80;

#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    pub path: PathBuf,
    pub skip_config: bool,
    pub skip_gitignore: bool,
    pub skip_commit: bool,
}

impl BootstrapOptions {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            skip_config: false,
            skip_gitignore: false,
            skip_commit: false,
        }
    }

    pub fn skip_config(mut self, skip: bool) -> Self {
        self.skip_config = skip;
        self
    }

    pub fn skip_gitignore(mut self, skip: bool) -> Self {
        self.skip_gitignore = skip;
        self
    }

    pub fn skip_commit(mut self, skip: bool) -> Self {
        self.skip_commit = skip;
        self
    }
}

/// What every step found or did. `None` marks a step skipped by option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub repository: RepositoryStatus,
    pub identity: Option<IdentityStatus>,
    pub ignore_file: Option<IgnoreFileStatus>,
    pub commit: Option<CommitStatus>,
}

/// Runs the setup steps in order, stopping at the first failure.
///
/// Operator answers are read from `input`.
pub struct Bootstrapper<G, R> {
    git: G,
    options: BootstrapOptions,
    input: R,
    interrupted: Option<Arc<AtomicBool>>,
}

impl<G: GitRunner, R: BufRead> Bootstrapper<G, R> {
    pub fn new(git: G, options: BootstrapOptions, input: R) -> Self {
        Self {
            git,
            options,
            input,
            interrupted: None,
        }
    }

    /// Flag raised on Ctrl-C. A step failing while it is set ends the run
    /// with `BootstrapError::Interrupted` instead of a step failure.
    pub fn interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = Some(flag);
        self
    }

    pub fn run(&mut self) -> BootstrapResult<BootstrapReport> {
        logger::lines(StyleMessage::title_box(TITLE, TITLE_WIDTH));
        logger::blank();

        let git = &self.git;
        let path = self.options.path.as_path();
        let input = &mut self.input;
        let interrupted = self.interrupted.as_deref();

        step(interrupted, "Prerequisites", || check_prerequisites(git, path))?;

        let repository = step(interrupted, "Repository Status", || {
            ensure_repository(git, path)
        })?;

        let identity = match self.options.skip_config {
            true => None,
            false => Some(step(interrupted, "Git Configuration", || {
                setup_identity(git, path, input)
            })?),
        };

        let ignore_file = match self.options.skip_gitignore {
            true => None,
            false => Some(step(interrupted, ".gitignore Setup", || {
                create_ignore_file(path)
            })?),
        };

        let commit = match self.options.skip_commit {
            true => None,
            false => Some(step(interrupted, "Initial Commit", || {
                make_initial_commit(git, path)
            })?),
        };

        step(interrupted, "Summary", || {
            logger::info(StyleMessage::setup_complete());
            logger::blank();
            logger::lines(StyleMessage::next_steps());
            Ok(())
        })?;

        Ok(BootstrapReport {
            repository,
            identity,
            ignore_file,
            commit,
        })
    }
}

fn step<T>(
    interrupted: Option<&AtomicBool>,
    title: &str,
    f: impl FnOnce() -> BootstrapResult<T>,
) -> BootstrapResult<T> {
    logger::section(title, || {
        // Ctrl-C also reaches the running git child, its failure is a symptom
        let result = match f() {
            Err(_) if interrupted.map_or(false, |flag| flag.load(Ordering::SeqCst)) => {
                return Err(BootstrapError::Interrupted);
            }
            result => result,
        };
        if let Err(err) = &result {
            report_failure(err);
        }
        logger::blank();
        result
    })
}

fn report_failure(err: &BootstrapError) {
    logger::error(StyleMessage::error(err.to_string()));
    if let BootstrapError::GitNotInstalled = err {
        logger::blank();
        logger::lines(StyleMessage::install_guidance());
    }
}
