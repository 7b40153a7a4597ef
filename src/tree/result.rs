//! Evaluation results and the default boolean combiner.

use super::node::LogicalOp;

/// Outcome of evaluating a tree node: a satisfaction flag plus a
/// caller-defined payload.
///
/// For boolean-only use the payload collapses to the flag itself (see
/// [`boolean_combine`]); richer payloads (which leaves matched, resolved
/// values, diagnostics) ride along without changing the recursion.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalResult<R> {
    pub satisfied: bool,
    pub result: R,
}

impl<R> EvalResult<R> {
    pub fn new(satisfied: bool, result: R) -> Self {
        Self { satisfied, result }
    }

    pub fn satisfied(result: R) -> Self {
        Self {
            satisfied: true,
            result,
        }
    }

    pub fn unsatisfied(result: R) -> Self {
        Self {
            satisfied: false,
            result,
        }
    }
}

impl From<bool> for EvalResult<bool> {
    fn from(satisfied: bool) -> Self {
        Self {
            satisfied,
            result: satisfied,
        }
    }
}

/// Default combiner: plain boolean conjunction/disjunction.
///
/// An empty AND is vacuously satisfied and an empty OR is vacuously
/// unsatisfied, the identity elements for each operator. The payload always
/// equals the combined flag.
pub fn boolean_combine(op: LogicalOp, children: Vec<EvalResult<bool>>) -> EvalResult<bool> {
    let satisfied = match op {
        LogicalOp::And => children.iter().all(|c| c.satisfied),
        LogicalOp::Or => children.iter().any(|c| c.satisfied),
    };
    EvalResult::from(satisfied)
}
