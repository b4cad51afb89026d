//! Accepted input shapes.

use crate::error::{OverlapError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One value handed to a check.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RangeInput {
    /// A CIDR block or bare IPv4 address.
    Cidr(String),
    /// A single integer.
    Integer(i64),
    /// An explicit inclusive `from..to` pair.
    Pair { from: i64, to: i64 },
}

impl RangeInput {
    /// Convert one loosely typed JSON element.
    ///
    /// Strings become CIDRs, integral numbers integers and objects with
    /// integral `from` and `to` members pairs. Anything else is
    /// [`OverlapError::UnsupportedType`].
    pub fn from_json(value: &Value) -> Result<RangeInput> {
        match value {
            Value::String(s) => Ok(RangeInput::Cidr(s.clone())),
            Value::Number(n) => n
                .as_i64()
                .map(RangeInput::Integer)
                .ok_or_else(|| OverlapError::unsupported(format!("number {n}"))),
            Value::Object(map) => {
                let from = map.get("from").and_then(Value::as_i64);
                let to = map.get("to").and_then(Value::as_i64);
                match (from, to) {
                    (Some(from), Some(to)) => Ok(RangeInput::Pair { from, to }),
                    _ => Err(OverlapError::unsupported(format!(
                        "object without integer from/to: {value}"
                    ))),
                }
            }
            Value::Null => Err(OverlapError::unsupported("null")),
            Value::Bool(_) => Err(OverlapError::unsupported("bool")),
            Value::Array(_) => Err(OverlapError::unsupported("list")),
        }
    }

    /// Convert a JSON list, failing on the first unsupported element.
    pub fn from_json_list(value: &Value) -> Result<Vec<RangeInput>> {
        let items = value
            .as_array()
            .ok_or_else(|| OverlapError::unsupported(format!("{} is not a list", json_kind(value))))?;
        items.iter().map(RangeInput::from_json).collect()
    }

    /// True for shapes that normalise to address ranges.
    pub fn is_address(&self) -> bool {
        matches!(self, RangeInput::Cidr(_))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

impl From<&str> for RangeInput {
    fn from(s: &str) -> Self {
        RangeInput::Cidr(s.to_string())
    }
}

impl From<i64> for RangeInput {
    fn from(n: i64) -> Self {
        RangeInput::Integer(n)
    }
}

impl From<(i64, i64)> for RangeInput {
    fn from((from, to): (i64, i64)) -> Self {
        RangeInput::Pair { from, to }
    }
}
