//! Requirement tree nodes.

use serde::Deserialize;

/// Boolean operator carried by a logical node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOp {
    And,
    Or,
}

/// A requirement tree: logical AND/OR nodes over opaque leaf values.
///
/// `T` is the caller's leaf type and is never inspected by the evaluator.
/// Children are owned by their parent, so a node cannot be its own
/// descendant and every tree is finite.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode<T> {
    /// Internal node combining child results under `op`. Child order is
    /// preserved and handed to the combiner unchanged.
    Logical {
        op: LogicalOp,
        children: Vec<TreeNode<T>>,
    },
    /// Terminal node carrying a caller-defined atomic constraint
    Leaf(T),
}

impl<T> TreeNode<T> {
    /// Shorthand for an AND node over `children`
    pub fn all(children: Vec<TreeNode<T>>) -> Self {
        TreeNode::Logical {
            op: LogicalOp::And,
            children,
        }
    }

    /// Shorthand for an OR node over `children`
    pub fn any(children: Vec<TreeNode<T>>) -> Self {
        TreeNode::Logical {
            op: LogicalOp::Or,
            children,
        }
    }

    /// Returns true if this node is a leaf
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    /// Number of leaves in this tree
    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Logical { children, .. } => children.iter().map(TreeNode::leaf_count).sum(),
        }
    }
}
