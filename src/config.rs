//! Command line and environment configuration, and logger setup.

use crate::output::OutputFormat;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Log format used when no log4rs file is found.
const DEFAULT_LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// IPv4 CIDR calculator.
///
/// Prints network, broadcast, usable host range, masks and host counts for
/// each ADDRESS/PREFIX given.
#[derive(Parser, Debug, Clone)]
#[command(name = "cidr-calc", version, about)]
pub struct Config {
    /// CIDR blocks such as 192.168.1.10/24. Read from stdin, one per line, when omitted.
    #[arg(value_name = "CIDR")]
    pub cidrs: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, env = "CIDR_CALC_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// log4rs configuration file.
    #[arg(long, env = "CIDR_CALC_LOG_CONFIG", default_value = "log4rs.yml")]
    pub log_config: PathBuf,

    /// Disable colors in text output.
    #[arg(long, env = "CIDR_CALC_NO_COLOR")]
    pub no_color: bool,
}

/// Start log4rs from `path`, or log warnings to stderr when the file is missing.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
        log::debug!("Logging configured from {}", path.display());
        return Ok(());
    }

    log4rs::init_config(default_log_config()?)?;
    log::debug!("No {} found, using default logging", path.display());
    Ok(())
}

fn default_log_config() -> Result<LogConfig, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN)))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}
