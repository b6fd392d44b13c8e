use anyhow::{Context, Result};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::ClientConfig;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sends `log` records to a file; the terminal UI owns stdout and stderr.
pub fn init(config: &ClientConfig) -> Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(&config.log_file)
        .with_context(|| format!("open log file {}", config.log_file.display()))?;

    let log_config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(config.log_level))
        .context("build log config")?;

    log4rs::init_config(log_config).context("install logger")?;
    Ok(())
}
