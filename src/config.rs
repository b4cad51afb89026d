//! Runtime configuration for the command line tool.
//!
//! Values come from the environment (a `.env` file is loaded by `main`) and
//! can be overridden with command line flags.

use clap::ValueEnum;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
/// Environment variable overriding [`DEFAULT_LOG_CONFIG`].
pub const LOG_CONFIG_ENV: &str = "RANGE_OVERLAP_LOG_CONFIG";
/// Environment variable selecting the default [`InputKind`].
pub const KIND_ENV: &str = "RANGE_OVERLAP_KIND";

/// How command line values are interpreted.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// CIDR blocks or bare IPv4 addresses
    #[default]
    Cidr,
    /// Single integers
    Int,
    /// Integer ranges written `from-to` or `from..to`
    Pair,
    /// A JSON list of strings, integers or {"from", "to"} objects
    Json,
}

impl FromStr for InputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cidr" | "cidrs" => Ok(InputKind::Cidr),
            "int" | "integer" | "integers" => Ok(InputKind::Int),
            "pair" | "pairs" => Ok(InputKind::Pair),
            "json" => Ok(InputKind::Json),
            other => Err(format!("Unknown input kind '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: PathBuf,
    pub kind: InputKind,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            kind: InputKind::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();
        if let Some(path) = lookup(LOG_CONFIG_ENV) {
            cfg.log_config = PathBuf::from(path);
        }
        if let Some(kind) = lookup(KIND_ENV) {
            cfg.kind = kind.parse().map_err(|e| format!("{KIND_ENV}: {e}"))?;
        }
        Ok(cfg)
    }
}

/// Initialise log4rs from `path`, or log warnings to stderr when it is missing.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l} {t} - {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    log::debug!("{} not found, using default logging", path.display());
    Ok(())
}
