//! Ctrl-C handling, run with:
//!     cargo test -p gitstrap --test cli_interrupt
//!
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::common::{stdout_of, Sandbox};

mod common;

const FAKE_GIT: &str = r#"#!/bin/sh
case "$1" in
  --version) echo "git version 2.40.0" ;;
  init) touch "$GITSTRAP_INIT_STARTED"; sleep 10 ;;
  *) exit 1 ;;
esac
"#;

/// `git` whose `init` hangs, placed first on PATH.
fn install_fake_git(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    let git = dir.join("git");
    fs::write(&git, FAKE_GIT).unwrap();
    fs::set_permissions(&git, fs::Permissions::from_mode(0o755)).unwrap();
}

fn wait_for(marker: &Path) {
    let started = Instant::now();
    while !marker.exists() {
        assert!(
            started.elapsed() < Duration::from_secs(10),
            "git init never started"
        );
        thread::sleep(Duration::from_millis(50));
    }
}

/// Test content:
///     1. Ctrl-C hits the whole foreground group while git init runs
///     2. git dies first, the run still ends as interrupted with status 1
#[test]
fn cli_interrupt_during_git() {
    let sandbox = Sandbox::new();
    let fake_bin = sandbox.root().join("fake-bin");
    let marker = sandbox.root().join("init-started");
    install_fake_git(&fake_bin);

    let path = format!(
        "{}:{}",
        fake_bin.display(),
        std::env::var("PATH").unwrap_or_default()
    );
    let child = sandbox
        .gitstrap_process(&["--skip-config"])
        .env("PATH", path)
        .env("GITSTRAP_INIT_STARTED", &marker)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .process_group(0)
        .spawn()
        .unwrap();

    wait_for(&marker);
    let group = format!("-{}", child.id());
    let status = Command::new("kill")
        .args(["-s", "INT", "--", &group])
        .status()
        .unwrap();
    assert!(status.success());

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = stdout_of(&output);
    assert_eq!(stdout.matches("Interrupted by user").count(), 1);
    assert!(!stdout.contains("Failed to initialize repository"));
    assert!(!stdout.contains("Unexpected error"));
}
