use log::debug;
use std::ffi::OsString;
use std::io::Read;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use wait_timeout::ChildExt;

use crate::utils::error::{BootstrapError, BootstrapResult};

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Access to the git executable.
pub trait GitRunner {
    /// Whether git can be started at all.
    fn probe(&self) -> bool;

    /// Runs `git <args>` inside `path` and returns its trimmed stdout.
    fn exec(&self, path: &Path, args: &[&str]) -> BootstrapResult<String>;
}

impl<T: GitRunner + ?Sized> GitRunner for &T {
    fn probe(&self) -> bool {
        (**self).probe()
    }

    fn exec(&self, path: &Path, args: &[&str]) -> BootstrapResult<String> {
        (**self).exec(path, args)
    }
}

#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
    envs: Vec<(OsString, OsString)>,
    probe_timeout: Duration,
    command_timeout: Duration,
}

impl Default for GitCli {
    fn default() -> Self {
        Self {
            program: OsString::from("git"),
            envs: Vec::new(),
            probe_timeout: PROBE_TIMEOUT,
            command_timeout: COMMAND_TIMEOUT,
        }
    }
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    fn run(&self, path: Option<&Path>, args: &[&str], timeout: Duration) -> BootstrapResult<String> {
        let command_str = format!("{} {}", self.program.to_string_lossy(), args.join(" "));
        debug!("{}", command_str);

        let mut command = Command::new(&self.program);
        command
            .args(args)
            .envs(self.envs.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(path) = path {
            command.current_dir(path);
        }

        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x08000000;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        let mut child = command
            .spawn()
            .map_err(|source| BootstrapError::GitCommandFailed {
                command: command_str.clone(),
                source,
            })?;

        // drain both pipes while waiting, a full pipe would stall the child
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match child
            .wait_timeout(timeout)
            .map_err(|source| BootstrapError::ProcessWaitFailed { source })?
        {
            Some(status) => status,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                // the drain threads are left detached: a grandchild still holding
                // a pipe would block a join, they exit once the last writer closes
                debug!("{} timed out", command_str);
                return Err(BootstrapError::GitCommandTimedOut {
                    command: command_str,
                    timeout,
                });
            }
        };

        let stdout = collect(stdout);
        let stderr = collect(stderr);
        debug!("{} exited with {}", command_str, status);

        match (status.success(), status.code()) {
            (true, _) => Ok(stdout),
            (false, Some(code)) => Err(BootstrapError::GitCommandError {
                command: command_str,
                code,
                stderr,
            }),
            (false, None) => Err(BootstrapError::GitCommandTerminated {
                command: command_str,
                signal: signal_of(&status),
            }),
        }
    }
}

#[cfg(unix)]
fn signal_of(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: &ExitStatus) -> Option<i32> {
    None
}

impl GitRunner for GitCli {
    fn probe(&self) -> bool {
        self.run(None, &["--version"], self.probe_timeout).is_ok()
    }

    fn exec(&self, path: &Path, args: &[&str]) -> BootstrapResult<String> {
        self.run(Some(path), args, self.command_timeout)
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

fn collect(handle: JoinHandle<Vec<u8>>) -> String {
    let bytes = handle.join().unwrap_or_default();
    String::from_utf8_lossy(&bytes).trim().to_string()
}
