#![allow(dead_code)]

use assert_cmd::Command;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use tempfile::TempDir;

/// Workspace directory with git's global config redirected into a temp home.
pub struct Sandbox {
    root: TempDir,
    workspace: PathBuf,
    home: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let workspace = root.path().join("workspace");
        let home = root.path().join("home");
        fs::create_dir_all(&workspace).unwrap();
        fs::create_dir_all(&home).unwrap();
        Self {
            root,
            workspace,
            home,
        }
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    fn envs(&self) -> Vec<(&'static str, OsString)> {
        vec![
            ("HOME", self.home.clone().into()),
            ("GIT_CONFIG_GLOBAL", self.home.join(".gitconfig").into()),
            ("GIT_CONFIG_NOSYSTEM", "1".into()),
            ("GIT_CEILING_DIRECTORIES", self.root.path().into()),
            ("NO_COLOR", "1".into()),
        ]
    }

    /// `gitstrap` pointed at the workspace.
    pub fn gitstrap(&self, args: &[&str]) -> Command {
        let mut command = Command::cargo_bin("gitstrap").unwrap();
        command
            .arg("--workspace-path")
            .arg(&self.workspace)
            .args(args)
            .envs(self.envs());
        command
    }

    /// Same as `gitstrap`, as a plain process the test can spawn and signal.
    pub fn gitstrap_process(&self, args: &[&str]) -> std::process::Command {
        let mut command = std::process::Command::new(assert_cmd::cargo::cargo_bin("gitstrap"));
        command
            .arg("--workspace-path")
            .arg(&self.workspace)
            .args(args)
            .envs(self.envs());
        command
    }

    pub fn execute_cmd(&self, cmd: &str, args: &[&str]) -> Result<String, anyhow::Error> {
        let output = std::process::Command::new(cmd)
            .current_dir(&self.workspace)
            .args(args)
            .envs(self.envs())
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
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
