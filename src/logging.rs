use crate::config::DEFAULT_LOG_LEVEL;
use crate::error::AppError;
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use std::path::Path;

pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => DEFAULT_LOG_LEVEL,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

pub fn setup_logging(level: LevelFilter, file_path: Option<&Path>) -> Result<(), AppError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "[{d(%Y-%m-%d %H:%M:%S)} {h({l})}] {m}{n}",
        )))
        .build();

    let mut builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root = Root::builder().appender("stderr");

    if let Some(path) = file_path {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(
                "[{d(%Y-%m-%d %H:%M:%S)} {l}] {m}{n}",
            )))
            .append(false)
            .build(path)
            .map_err(|e| AppError::Io {
                source: e,
                context: Some(format!("create log file {}", path.display())),
            })?;
        builder = builder.appender(Appender::builder().build("logfile", Box::new(logfile)));
        root = root.appender("logfile");
    }

    let root_level = if file_path.is_some() {
        LevelFilter::Debug
    } else {
        level
    };
    let log_config = builder
        .build(root.build(root_level))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    log4rs::init_config(log_config).map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(())
}

#[macro_export]
macro_rules! log_app_startup {
    () => {
        log::info!("hexto256 v{}", env!("CARGO_PKG_VERSION"));
    };
}
