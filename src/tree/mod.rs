//! Generic AND/OR requirement trees and their evaluation.
//!
//! The evaluator knows nothing about what a leaf means; leaf semantics and
//! result combination are supplied by the caller as closures. The policy
//! layer builds on this with field constraints at the leaves, but any leaf
//! type works.
//!
//! ## Module Structure
//!
//! - `node`: TreeNode and LogicalOp
//! - `result`: EvalResult and the default boolean combiner
//! - `evaluator`: recursive evaluation, infallible and fallible

mod evaluator;
mod node;
mod result;

pub use evaluator::{evaluate, try_evaluate};
pub use node::{LogicalOp, TreeNode};
pub use result::{boolean_combine, EvalResult};

#[cfg(test)]
mod tests;
