#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use gitstrap::{BootstrapError, BootstrapResult, GitCli, GitRunner};
use tempfile::TempDir;

pub mod failed_message {
    pub const GIT_INIT: &str = "git init failed";
    pub const GIT_ADD: &str = "git add failed";
    pub const GIT_COMMIT: &str = "git commit failed";
    pub const GIT_CONFIG: &str = "git config failed";
    pub const GIT_REV_LIST: &str = "git rev-list failed";
    pub const WRITE_FILE: &str = "write file failed";
    pub const READ_FILE: &str = "read file failed";
    pub const CREATE_DIR: &str = "create dir failed";
}

/// A throwaway workspace plus an isolated home holding git's global config.
pub struct TestWorkspace {
    root: TempDir,
    workspace: PathBuf,
    home: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect(failed_message::CREATE_DIR);
        let workspace = root.path().join("workspace");
        let home = root.path().join("home");
        fs::create_dir_all(&workspace).expect(failed_message::CREATE_DIR);
        fs::create_dir_all(&home).expect(failed_message::CREATE_DIR);
        Self {
            root,
            workspace,
            home,
        }
    }

    pub fn path(&self) -> &Path {
        &self.workspace
    }

    pub fn global_config(&self) -> PathBuf {
        self.home.join(".gitconfig")
    }

    /// Git runner that never reads the real user or system config.
    pub fn git(&self) -> GitCli {
        GitCli::new()
            .env("HOME", &self.home)
            .env("GIT_CONFIG_GLOBAL", self.global_config())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_CEILING_DIRECTORIES", self.root.path())
    }

    pub fn git_cmd(&self, args: &[&str]) -> Result<String, anyhow::Error> {
        let output = Command::new("git")
            .current_dir(&self.workspace)
            .args(args)
            .env("HOME", &self.home)
            .env("GIT_CONFIG_GLOBAL", self.global_config())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_CEILING_DIRECTORIES", self.root.path())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;
        let stdout = String::from_utf8(output.stdout)?;
        let stderr = String::from_utf8(output.stderr)?;

        match output.status.success() {
            false => Err(anyhow::anyhow!(stderr)),
            true => Ok(stdout.trim().to_string()),
        }
    }

    pub fn configure_identity(&self, name: &str, email: &str) {
        self.git_cmd(&["config", "--global", "user.name", name])
            .expect(failed_message::GIT_CONFIG);
        self.git_cmd(&["config", "--global", "user.email", email])
            .expect(failed_message::GIT_CONFIG);
    }

    pub fn global_value(&self, key: &str) -> Option<String> {
        self.git_cmd(&["config", "--global", key]).ok()
    }

    pub fn write_file(&self, rel_path: &str, content: &str) {
        let file = self.workspace.join(rel_path);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).expect(failed_message::CREATE_DIR);
        }
        fs::write(file, content).expect(failed_message::WRITE_FILE);
    }

    /// Initialized repository with one commit containing `README.md`.
    pub fn init_with_commit(&self) {
        self.configure_identity("Test User", "test@example.com");
        self.git_cmd(&["init"]).expect(failed_message::GIT_INIT);
        self.write_file("README.md", "# workspace\n");
        self.git_cmd(&["add", "."]).expect(failed_message::GIT_ADD);
        self.git_cmd(&["commit", "-m", "first"])
            .expect(failed_message::GIT_COMMIT);
    }

    pub fn commit_count(&self) -> usize {
        self.git_cmd(&["rev-list", "--count", "HEAD"])
            .expect(failed_message::GIT_REV_LIST)
            .parse()
            .expect(failed_message::GIT_REV_LIST)
    }
}

/// Wraps a runner and remembers every git invocation.
pub struct RecordingGit<G> {
    inner: G,
    fail_on: Option<&'static str>,
    calls: RefCell<Vec<Vec<String>>>,
    probes: RefCell<usize>,
}

impl<G: GitRunner> RecordingGit<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            fail_on: None,
            calls: RefCell::new(Vec::new()),
            probes: RefCell::new(0),
        }
    }

    /// Makes every invocation of `subcommand` exit with an error.
    pub fn failing_on(mut self, subcommand: &'static str) -> Self {
        self.fail_on = Some(subcommand);
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, subcommand: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|args| args.first().map(String::as_str) == Some(subcommand))
            .count()
    }

    pub fn probes(&self) -> usize {
        *self.probes.borrow()
    }
}

impl<G: GitRunner> GitRunner for RecordingGit<G> {
    fn probe(&self) -> bool {
        *self.probes.borrow_mut() += 1;
        self.inner.probe()
    }

    fn exec(&self, path: &Path, args: &[&str]) -> BootstrapResult<String> {
        self.calls
            .borrow_mut()
            .push(args.iter().map(|arg| arg.to_string()).collect());

        if args.first().copied() == self.fail_on {
            return Err(BootstrapError::GitCommandError {
                command: format!("git {}", args.join(" ")),
                code: 128,
                stderr: format!("fatal: {} refused", args[0]),
            });
        }
        self.inner.exec(path, args)
    }
}
