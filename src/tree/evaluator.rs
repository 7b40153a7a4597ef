//! Recursive depth-first tree evaluation.

use super::node::{LogicalOp, TreeNode};
use super::result::EvalResult;

/// Evaluate a requirement tree depth-first.
///
/// Leaves are mapped through `eval_leaf`; logical nodes evaluate every child
/// unconditionally, then hand the operator and the full ordered child
/// results to `combine`. There is no short-circuiting: `eval_leaf` runs for
/// every leaf, so side effects and diagnostic payloads are complete even on
/// branches whose outcome is already decided by a sibling. Nothing is cached
/// between calls; the walk is pure apart from whatever the closures do.
pub fn evaluate<T, R, L, C>(node: &TreeNode<T>, eval_leaf: &mut L, combine: &mut C) -> EvalResult<R>
where
    L: FnMut(&T) -> EvalResult<R>,
    C: FnMut(LogicalOp, Vec<EvalResult<R>>) -> EvalResult<R>,
{
    match node {
        TreeNode::Leaf(value) => eval_leaf(value),
        TreeNode::Logical { op, children } => {
            let mut results = Vec::with_capacity(children.len());
            for child in children {
                results.push(evaluate(child, eval_leaf, combine));
            }
            combine(*op, results)
        }
    }
}

/// Fallible variant of [`evaluate`] for leaf or combine logic that can fail.
///
/// The first error aborts the remaining traversal and is returned to the
/// caller unchanged; nothing is caught, wrapped, or recovered here. Swallowing
/// such errors would hide genuine requirement-evaluation bugs, so callers that
/// want partial results must handle errors inside their own closures.
pub fn try_evaluate<T, R, E, L, C>(
    node: &TreeNode<T>,
    eval_leaf: &mut L,
    combine: &mut C,
) -> Result<EvalResult<R>, E>
where
    L: FnMut(&T) -> Result<EvalResult<R>, E>,
    C: FnMut(LogicalOp, Vec<EvalResult<R>>) -> Result<EvalResult<R>, E>,
{
    match node {
        TreeNode::Leaf(value) => eval_leaf(value),
        TreeNode::Logical { op, children } => {
            let mut results = Vec::with_capacity(children.len());
            for child in children {
                results.push(try_evaluate(child, eval_leaf, combine)?);
            }
            combine(*op, results)
        }
    }
}
