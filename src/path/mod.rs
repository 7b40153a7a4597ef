//! Constrained dot-notation lookup into nested JSON values.
//!
//! The grammar is deliberately narrow: `$.a.b.c` descends through object
//! properties only. No array indices, wildcards, filters, or recursive
//! descent — anything outside the grammar fails resolution rather than
//! guessing. Absence of a field is an expected, first-class outcome, never
//! an error, and a malformed path reports the same way as a missing field.

use serde_json::Value;

/// Result of resolving a path against a claims object.
///
/// `Found` may hold `Value::Null`: a field that is present and null
/// resolves, which is distinct from a field that is absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Found(&'a Value),
    Missing,
}

impl<'a> Resolution<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn value(&self) -> Option<&'a Value> {
        match self {
            Resolution::Found(v) => Some(v),
            Resolution::Missing => None,
        }
    }
}

/// Resolve a `$.`-prefixed dot path against `root`.
///
/// Resolution fails when the prefix is absent (the root is never inspected
/// in that case), when an intermediate value is null, an array, or a scalar,
/// or when a segment names a property the current object does not have.
/// Empty segments from a trailing or doubled dot are not special-cased; they
/// fail the lookup at that step like any other absent key.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Resolution<'a> {
    let Some(rest) = path.strip_prefix("$.") else {
        return Resolution::Missing;
    };

    let mut current = root;
    for segment in rest.split('.') {
        let Value::Object(map) = current else {
            return Resolution::Missing;
        };
        match map.get(segment) {
            Some(next) => current = next,
            None => return Resolution::Missing,
        }
    }
    Resolution::Found(current)
}
