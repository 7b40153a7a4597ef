//! Tests for tree evaluation.

use super::*;

/// Leaf used by visit-tracking tests: a label plus the boolean the leaf
/// should evaluate to.
#[derive(Debug, Clone, PartialEq)]
struct Labeled {
    name: &'static str,
    value: bool,
}

fn leaf(name: &'static str, value: bool) -> TreeNode<Labeled> {
    TreeNode::Leaf(Labeled { name, value })
}

fn eval_bool_tree(node: &TreeNode<Labeled>) -> EvalResult<bool> {
    evaluate(
        node,
        &mut |l: &Labeled| EvalResult::from(l.value),
        &mut boolean_combine,
    )
}

#[test]
fn test_leaf_delegates_to_eval_leaf() {
    let node = TreeNode::Leaf(41);
    let result = evaluate(
        &node,
        &mut |n: &i32| EvalResult::new(*n > 40, *n + 1),
        &mut |_, _| unreachable!("combine must not run for a bare leaf"),
    );
    assert!(result.satisfied);
    assert_eq!(result.result, 42);
}

#[test]
fn test_and_requires_all_children() {
    let tree = TreeNode::all(vec![leaf("a", true), leaf("b", true), leaf("c", false)]);
    assert!(!eval_bool_tree(&tree).satisfied);

    let tree = TreeNode::all(vec![leaf("a", true), leaf("b", true)]);
    assert!(eval_bool_tree(&tree).satisfied);
}

#[test]
fn test_or_requires_any_child() {
    let tree = TreeNode::any(vec![leaf("a", false), leaf("b", false), leaf("c", true)]);
    assert!(eval_bool_tree(&tree).satisfied);

    let tree = TreeNode::any(vec![leaf("a", false), leaf("b", false)]);
    assert!(!eval_bool_tree(&tree).satisfied);
}

#[test]
fn test_empty_and_is_vacuously_satisfied() {
    let tree: TreeNode<Labeled> = TreeNode::all(vec![]);
    assert!(eval_bool_tree(&tree).satisfied);
}

#[test]
fn test_empty_or_is_vacuously_unsatisfied() {
    let tree: TreeNode<Labeled> = TreeNode::any(vec![]);
    assert!(!eval_bool_tree(&tree).satisfied);
}

#[test]
fn test_singleton_equals_child() {
    for value in [true, false] {
        let and = TreeNode::all(vec![leaf("x", value)]);
        let or = TreeNode::any(vec![leaf("x", value)]);
        assert_eq!(eval_bool_tree(&and).satisfied, value);
        assert_eq!(eval_bool_tree(&or).satisfied, value);
    }
}

#[test]
fn test_nested_mixed_tree() {
    // AND(a, OR(b, c), OR()) -> unsatisfied because of the empty OR
    let tree = TreeNode::all(vec![
        leaf("a", true),
        TreeNode::any(vec![leaf("b", false), leaf("c", true)]),
        TreeNode::any(vec![]),
    ]);
    assert!(!eval_bool_tree(&tree).satisfied);

    // AND(a, OR(b, c), AND()) -> satisfied
    let tree = TreeNode::all(vec![
        leaf("a", true),
        TreeNode::any(vec![leaf("b", false), leaf("c", true)]),
        TreeNode::all(vec![]),
    ]);
    assert!(eval_bool_tree(&tree).satisfied);
}

#[test]
fn test_every_leaf_visited_exactly_once_in_order() {
    // The first AND child is already false; without the no-short-circuit
    // guarantee the OR branch would never run.
    let tree = TreeNode::all(vec![
        leaf("a", false),
        TreeNode::any(vec![leaf("b", true), leaf("c", true)]),
        leaf("d", false),
    ]);

    let mut visited = Vec::new();
    let result = evaluate(
        &tree,
        &mut |l: &Labeled| {
            visited.push(l.name);
            EvalResult::from(l.value)
        },
        &mut boolean_combine,
    );

    assert!(!result.satisfied);
    assert_eq!(visited, vec!["a", "b", "c", "d"]);
    assert_eq!(visited.len(), tree.leaf_count());
}

#[test]
fn test_or_does_not_stop_at_first_match() {
    let tree = TreeNode::any(vec![leaf("a", true), leaf("b", true), leaf("c", false)]);

    let mut visits = 0;
    let result = evaluate(
        &tree,
        &mut |l: &Labeled| {
            visits += 1;
            EvalResult::from(l.value)
        },
        &mut boolean_combine,
    );

    assert!(result.satisfied);
    assert_eq!(visits, 3);
}

#[test]
fn test_combine_sees_ordered_child_results() {
    let tree = TreeNode::any(vec![leaf("a", false), leaf("b", true), leaf("c", false)]);

    let mut seen: Vec<(LogicalOp, Vec<bool>)> = Vec::new();
    evaluate(
        &tree,
        &mut |l: &Labeled| EvalResult::from(l.value),
        &mut |op, children| {
            seen.push((op, children.iter().map(|c| c.satisfied).collect()));
            boolean_combine(op, children)
        },
    );

    assert_eq!(seen, vec![(LogicalOp::Or, vec![false, true, false])]);
}

#[test]
fn test_rich_payload_collects_matching_leaves() {
    let tree = TreeNode::all(vec![
        leaf("country", true),
        TreeNode::any(vec![leaf("age", false), leaf("consent", true)]),
    ]);

    let result = evaluate(
        &tree,
        &mut |l: &Labeled| {
            let names = if l.value { vec![l.name] } else { vec![] };
            EvalResult::new(l.value, names)
        },
        &mut |op, children: Vec<EvalResult<Vec<&'static str>>>| {
            let satisfied = match op {
                LogicalOp::And => children.iter().all(|c| c.satisfied),
                LogicalOp::Or => children.iter().any(|c| c.satisfied),
            };
            let names = children.into_iter().flat_map(|c| c.result).collect();
            EvalResult::new(satisfied, names)
        },
    );

    assert!(result.satisfied);
    assert_eq!(result.result, vec!["country", "consent"]);
}

#[test]
fn test_try_evaluate_propagates_leaf_error() {
    let tree = TreeNode::all(vec![leaf("a", true), leaf("boom", true), leaf("c", true)]);

    let mut visited = Vec::new();
    let result: Result<EvalResult<bool>, String> = try_evaluate(
        &tree,
        &mut |l: &Labeled| {
            visited.push(l.name);
            if l.name == "boom" {
                Err("leaf lookup failed".to_string())
            } else {
                Ok(EvalResult::from(l.value))
            }
        },
        &mut |op, children| Ok(boolean_combine(op, children)),
    );

    assert_eq!(result.unwrap_err(), "leaf lookup failed");
    // The error aborts the remaining traversal.
    assert_eq!(visited, vec!["a", "boom"]);
}

#[test]
fn test_try_evaluate_propagates_combine_error() {
    let tree = TreeNode::any(vec![leaf("a", false)]);

    let result: Result<EvalResult<bool>, String> = try_evaluate(
        &tree,
        &mut |l: &Labeled| Ok(EvalResult::from(l.value)),
        &mut |_, _| Err("combiner rejected".to_string()),
    );

    assert_eq!(result.unwrap_err(), "combiner rejected");
}

#[test]
fn test_deeply_nested_tree() {
    // Chain of 64 single-child AND nodes above one satisfied leaf.
    let mut tree = leaf("base", true);
    for _ in 0..64 {
        tree = TreeNode::all(vec![tree]);
    }
    assert!(eval_bool_tree(&tree).satisfied);
    assert_eq!(tree.leaf_count(), 1);
}
