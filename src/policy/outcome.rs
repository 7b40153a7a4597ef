//! Evaluation outcome and per-constraint evidence.

use serde::Serialize;
use serde_json::Value;

/// Record of a single constraint evaluation
#[derive(Debug, Clone, Serialize)]
pub struct Evidence {
    /// Dot path the constraint resolved
    pub path: String,
    /// Resolved claim value; absent when the path did not resolve
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Whether the constraint was satisfied
    pub satisfied: bool,
    /// Constraint description, when the policy provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// Result of evaluating a policy against a claims object.
///
/// `evidence` covers every constraint visited, in document order, satisfied
/// or not: branches on the losing side of an `any` are still evaluated and
/// reported.
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    pub satisfied: bool,
    pub evidence: Vec<Evidence>,
}

impl MatchOutcome {
    /// Evidence entries for constraints that were not satisfied
    pub fn misses(&self) -> impl Iterator<Item = &Evidence> {
        self.evidence.iter().filter(|e| !e.satisfied)
    }
}
