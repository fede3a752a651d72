use clap::{ArgAction, Parser};
use std::env;
use std::path::PathBuf;

use gitstrap::BootstrapOptions;

const EXAMPLES: &str = "\
Examples:
  gitstrap
  gitstrap --skip-config
  gitstrap --skip-gitignore --skip-commit
  gitstrap --workspace-path ../my-project";

#[derive(Parser, Debug)]
#[command(
    name = "gitstrap",
    author,
    version,
    about = "Bootstrap Git for a workspace",
    long_about = None,
    after_help = EXAMPLES
)]
pub(crate) struct Cli {
    /// Skip Git configuration (user.name, user.email)
    #[arg(long, action = ArgAction::SetTrue)]
    pub skip_config: bool,

    /// Skip creating .gitignore file
    #[arg(long, action = ArgAction::SetTrue)]
    pub skip_gitignore: bool,

    /// Skip making initial commit
    #[arg(long, action = ArgAction::SetTrue)]
    pub skip_commit: bool,

    /// Path to workspace (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub workspace_path: Option<PathBuf>,

    /// Trace every git invocation
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_options(self) -> std::io::Result<BootstrapOptions> {
        let current_dir = env::current_dir()?;
        let path = match self.workspace_path {
            Some(path) => current_dir.join(path),
            None => current_dir,
        };
        // a missing path stays as given, the prerequisites step reports it
        let path = path.canonicalize().unwrap_or(path);

        Ok(BootstrapOptions::new(path)
            .skip_config(self.skip_config)
            .skip_gitignore(self.skip_gitignore)
            .skip_commit(self.skip_commit))
    }
}
