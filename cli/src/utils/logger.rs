use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

const APPENDER: &str = "stdout";

pub(crate) fn init_log(verbose: bool) -> anyhow::Result<()> {
    let level = match verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build(APPENDER, Box::new(stdout)))
        .logger(Logger::builder().build("gitstrap", level))
        .build(Root::builder().appender(APPENDER).build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}
