use signal_hook::consts::SIGINT;
use signal_hook::flag;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use gitstrap::utils::logger;
use gitstrap::utils::StyleMessage;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

static REPORTED: AtomicBool = AtomicBool::new(false);

/// Raises the returned flag on Ctrl-C.
///
/// A watcher thread aborts the run with exit status 1 once the flag is up,
/// which covers a run blocked on a prompt. A run blocked on git sees its
/// child die first and ends through the flag instead.
pub(crate) fn install() -> std::io::Result<Arc<AtomicBool>> {
    let interrupted = Arc::new(AtomicBool::new(false));
    flag::register(SIGINT, Arc::clone(&interrupted))?;

    let watched = Arc::clone(&interrupted);
    thread::spawn(move || loop {
        if watched.load(Ordering::SeqCst) {
            report();
            process::exit(1);
        }
        thread::sleep(POLL_INTERVAL);
    });
    Ok(interrupted)
}

/// Prints "Interrupted by user" once, whoever notices first.
pub(crate) fn report() {
    if !REPORTED.swap(true, Ordering::SeqCst) {
        logger::blank();
        logger::error(StyleMessage::interrupted());
    }
}
