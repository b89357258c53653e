//! Where the client's log records go.
//!
//! The prompt and the log share a terminal, so by default records are kept
//! in `./analyzer.log`. When that file cannot be created the client logs to
//! the terminal instead of running without a logger.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./analyzer.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    File,
    Terminal,
    Both,
}

pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let _ = CombinedLogger::init(build_loggers(destination, level, Path::new(LOG_FILE)));
}

fn build_loggers(
    destination: LogDestination,
    level: LevelFilter,
    log_path: &Path,
) -> Vec<Box<dyn SharedLogger>> {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let file_logger = match destination {
        LogDestination::File | LogDestination::Both => {
            file_logger(level, config.clone(), log_path)
        }
        LogDestination::Terminal => None,
    };
    let wants_terminal = destination != LogDestination::File || file_logger.is_none();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::with_capacity(2);
    if wants_terminal {
        loggers.push(TermLogger::new(
            level,
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if let Some(file_logger) = file_logger {
        loggers.push(file_logger);
    }
    loggers
}

fn file_logger(level: LevelFilter, config: Config, path: &Path) -> Option<Box<dyn SharedLogger>> {
    match File::create(path) {
        Ok(file) => {
            let logger: Box<dyn SharedLogger> = WriteLogger::new(level, config, file);
            Some(logger)
        }
        Err(err) => {
            eprintln!("Warning: logging to the terminal, {}: {}", path.display(), err);
            None
        }
    }
}
