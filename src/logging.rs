//! log4rs setup for the binary.
//!
//! Everything goes to stderr so the report on stdout stays clean.

use crate::config::Config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l})} {t} - {m}{n}";

/// Stderr level for a `-v` count.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize logging.
///
/// Uses `config.log_config` when the file exists and no `-v` was given,
/// otherwise a stderr console logger at [`level_for_verbosity`].
pub fn init_logging(config: &Config, verbose: u8) -> Result<(), Box<dyn Error>> {
    if verbose == 0 && Path::new(&config.log_config).exists() {
        log4rs::init_file(&config.log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", config.log_config))?;
        log::debug!("Logging configured from {}", config.log_config);
        return Ok(());
    }

    let log_config = stderr_config(level_for_verbosity(verbose))?;
    log4rs::init_config(log_config).map_err(|e| format!("Error initializing log4rs: {e}"))?;
    Ok(())
}

fn stderr_config(level: LevelFilter) -> Result<LogConfig, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| format!("Invalid log4rs config: {e}"))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(3), LevelFilter::Trace);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn test_stderr_config_builds() {
        let config = stderr_config(LevelFilter::Debug).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert_eq!(config.appenders().len(), 1);
    }
}
