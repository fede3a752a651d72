mod cli;
mod utils;

use clap::Parser;
use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use gitstrap::utils::logger;
use gitstrap::utils::StyleMessage;
use gitstrap::{BootstrapError, Bootstrapper, GitCli};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    #[cfg(windows)]
    let _ = ansi_term::enable_ansi_support();

    if let Err(e) = utils::logger::init_log(cli.verbose) {
        eprintln!("{}", StyleMessage::unexpected_error(e));
        return ExitCode::FAILURE;
    }

    // the default panic message would bypass the logger
    panic::set_hook(Box::new(|_| {}));

    match panic::catch_unwind(AssertUnwindSafe(|| run(cli))) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            match e.downcast_ref::<BootstrapError>() {
                Some(BootstrapError::Interrupted) => utils::interrupt::report(),
                // step failures were already reported inside their section
                Some(_) => {}
                None => logger::error(StyleMessage::unexpected_error(e)),
            }
            ExitCode::FAILURE
        }
        Err(payload) => {
            logger::error(StyleMessage::unexpected_error(panic_message(&*payload)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let interrupted = utils::interrupt::install()?;

    let options = cli.into_options()?;
    let stdin = io::stdin();
    let mut bootstrapper = Bootstrapper::new(GitCli::new(), options, stdin.lock())
        .interrupt_flag(interrupted);
    bootstrapper.run()?;
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "panic"
    }
}
