//! Prepares a directory for use with Git: checks that git is installed,
//! initializes a repository, configures the author identity, writes a
//! default `.gitignore` and records an initial commit. Every step is safe
//! to run again on a workspace that is already set up.

pub mod core;
pub mod ops;
pub mod utils;

pub use ops::{BootstrapOptions, BootstrapReport, Bootstrapper};
pub use utils::cmd::{GitCli, GitRunner};
pub use utils::error::{BootstrapError, BootstrapResult};
