//! Atomic checks applied to resolved claim values.

use crate::error::{PolicyError, Result};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

/// A single check against the value a constraint's path resolves to.
///
/// Checks never error at evaluation time: a value of the wrong kind (a
/// number where a pattern expects a string, a string where a range expects
/// a number) simply does not satisfy the check.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// Field must be present; a present null still counts as present
    Exists,
    /// Resolved value must equal `value` exactly
    Equals { value: Value },
    /// Resolved value must be a string matching `regex` (unanchored).
    /// The pattern must be compiled before evaluation — policies compile at
    /// load, hand-built constraints via [`super::FieldConstraint::new`]; an
    /// uncompiled pattern satisfies nothing.
    Pattern {
        regex: String,
        #[serde(skip)]
        compiled: Option<Regex>,
    },
    /// Resolved value must be a number within the inclusive bounds
    Range {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
    /// Resolved value must equal one of `values`
    OneOf { values: Vec<Value> },
}

impl Check {
    /// Pre-compile the regex for pattern checks.
    ///
    /// `path` only labels the error; compilation happens once at policy load
    /// so evaluation never has to report a bad pattern.
    pub(crate) fn compile(&mut self, path: &str) -> Result<()> {
        if let Check::Pattern { regex, compiled } = self {
            match Regex::new(regex) {
                Ok(re) => *compiled = Some(re),
                Err(source) => {
                    return Err(PolicyError::invalid_pattern(path, regex.as_str(), source))
                }
            }
        }
        Ok(())
    }

    /// Apply this check to a resolved value
    pub(crate) fn apply(&self, value: &Value) -> bool {
        match self {
            Check::Exists => true,
            Check::Equals { value: expected } => value == expected,
            Check::Pattern { compiled, .. } => {
                // An uncompiled pattern asserts nothing; bad patterns are
                // rejected at compile() so they can never be absorbed here.
                let (Some(re), Some(s)) = (compiled.as_ref(), value.as_str()) else {
                    return false;
                };
                re.is_match(s)
            }
            Check::Range { min, max } => {
                let Some(n) = value.as_f64() else {
                    return false;
                };
                min.is_none_or(|m| n >= m) && max.is_none_or(|m| n <= m)
            }
            Check::OneOf { values } => values.contains(value),
        }
    }
}
