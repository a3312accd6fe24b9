use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::General;
use crate::errors::LoggingError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {t} - {m}{n}";

/// Builds the log4rs configuration. Console logging always goes to stderr so that
/// stdout carries nothing but the reports.
///
/// # Arguments
///
/// * 'general' - general configuration holding log level and optional log file
pub fn log_config(general: &General) -> Result<Config, LoggingError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let mut builder = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)));
    let mut root = Root::builder().appender("stderr");

    if let Some(path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    Ok(builder.build(root.build(general.log_level))?)
}

/// Installs the global logger
///
/// # Arguments
///
/// * 'general' - general configuration holding log level and optional log file
pub fn init_logging(general: &General) -> Result<(), LoggingError> {
    let config = log_config(general)?;
    let _ = log4rs::init_config(config)?;

    Ok(())
}
