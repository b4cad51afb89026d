//! Command line handling for the `range-overlap` binary.
//!
//! Values are read from the arguments or from a file, converted according to
//! the selected [`InputKind`] and checked with [`find_conflict`].

use crate::config::{Config, InputKind};
use crate::error::OverlapError;
use crate::models::RangeInput;
use crate::processing::Conflict;
use crate::find_conflict;
use clap::Parser;
use regex::Regex;
use serde_json::Value;
use std::error::Error;
use std::path::PathBuf;
use std::sync::OnceLock;

#[derive(Parser, Debug)]
#[command(name = "range-overlap")]
#[command(about = "Detect overlapping CIDR blocks, integers or integer ranges.")]
pub struct CommandLine {
    /// How to interpret the values [env: RANGE_OVERLAP_KIND]
    #[arg(short, long, value_enum)]
    pub kind: Option<InputKind>,
    /// Read values from a file instead of the arguments
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// log4rs configuration file [env: RANGE_OVERLAP_LOG_CONFIG]
    #[arg(long)]
    pub log_config: Option<PathBuf>,
    /// Values to check, e.g. 10.0.0.0/16 10.1.0.0/16
    pub values: Vec<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Apply the flags given on the command line on top of `cfg`.
    pub fn apply(&self, mut cfg: Config) -> Config {
        if let Some(kind) = self.kind {
            cfg.kind = kind;
        }
        if let Some(path) = &self.log_config {
            cfg.log_config = path.clone();
        }
        cfg
    }
}

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No two of `checked` values overlap.
    Clean { checked: usize },
    Overlap(Conflict),
    Invalid(OverlapError),
}

impl Verdict {
    /// 0 when clean, 1 on overlap, 2 on invalid input.
    pub fn exit_code(&self) -> u8 {
        match self {
            Verdict::Clean { .. } => 0,
            Verdict::Overlap(_) => 1,
            Verdict::Invalid(_) => 2,
        }
    }
}

/// Regex for splitting value lists while preserving quoted values.
static VALUE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_value_regex() -> &'static Regex {
    VALUE_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'[\s,]*|"([^"]*)"[\s,]*|([^'"\s,]+)[\s,]*"#).expect("Invalid Regex")
    })
}

/// Regex for `from-to` and `from..to` pairs.
static PAIR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_pair_regex() -> &'static Regex {
    PAIR_REGEX.get_or_init(|| {
        Regex::new(r"^(-?\d+)\s*(?:\.\.=?|-)\s*(-?\d+)$").expect("Invalid Regex")
    })
}

/// Split on whitespace and commas, keeping 'quoted values' together.
pub fn split_values(input: &str) -> Vec<&str> {
    get_value_regex()
        .captures_iter(input)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse `1-5`, `1..5` or `1..=5`.
pub fn parse_pair(token: &str) -> Result<(i64, i64), OverlapError> {
    let caps = get_pair_regex()
        .captures(token.trim())
        .ok_or_else(|| OverlapError::unsupported(format!("'{token}' is not a from-to pair")))?;
    let bound = |i: usize| {
        caps[i]
            .parse::<i64>()
            .map_err(|e| OverlapError::unsupported(format!("'{token}': {e}")))
    };
    Ok((bound(1)?, bound(2)?))
}

/// Convert text tokens into inputs of the given kind.
pub fn tokens_to_inputs<S: AsRef<str>>(
    kind: InputKind,
    tokens: &[S],
) -> Result<Vec<RangeInput>, OverlapError> {
    tokens
        .iter()
        .map(|t| {
            let t = t.as_ref();
            match kind {
                InputKind::Cidr => Ok(RangeInput::Cidr(t.to_string())),
                InputKind::Int => t
                    .trim()
                    .parse::<i64>()
                    .map(RangeInput::Integer)
                    .map_err(|_| OverlapError::unsupported(format!("'{t}' is not an integer"))),
                InputKind::Pair => parse_pair(t).map(RangeInput::from),
                InputKind::Json => {
                    let value: Value = serde_json::from_str(t)
                        .map_err(|_| OverlapError::unsupported(format!("'{t}' is not JSON")))?;
                    RangeInput::from_json(&value)
                }
            }
        })
        .collect()
}

/// Parse a JSON document, reporting the failing path.
pub fn parse_json(text: &str) -> Result<Value, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    let value: Value = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing JSON: path={} error={}", e.path(), e))?;
    Ok(value)
}

/// Gather the values and check them.
///
/// I/O and JSON syntax problems are errors, everything about the values
/// themselves ends up in the [`Verdict`].
pub fn run(commands: &CommandLine, cfg: &Config) -> Result<Verdict, Box<dyn Error>> {
    let text = match &commands.file {
        Some(path) => {
            log::info!("Reading values from {}", path.display());
            Some(
                std::fs::read_to_string(path)
                    .map_err(|e| format!("Error reading {}: {e}", path.display()))?,
            )
        }
        None => None,
    };

    let inputs = match (cfg.kind, &text) {
        (InputKind::Json, Some(text)) => RangeInput::from_json_list(&parse_json(text)?),
        (kind, Some(text)) => tokens_to_inputs(kind, &split_values(text)),
        (kind, None) => tokens_to_inputs(kind, &commands.values),
    };
    let inputs = match inputs {
        Ok(inputs) => inputs,
        Err(e) => return Ok(Verdict::Invalid(e)),
    };
    log::info!("Checking {} {:?} values", inputs.len(), cfg.kind);

    let verdict = match find_conflict(&inputs) {
        Ok(None) => Verdict::Clean {
            checked: inputs.len(),
        },
        Ok(Some(conflict)) => Verdict::Overlap(conflict),
        Err(e) => Verdict::Invalid(e),
    };
    Ok(verdict)
}
