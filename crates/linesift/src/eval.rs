//! Expression tree evaluation against a single line.
//!
//! The evaluator is not a conventional bottom-up fold. It performs an
//! in-order walk (left subtree, current node, right subtree) threading a
//! boolean verdict that starts `true`. Leaves are silent; they only
//! contribute when the parent operator reads them as terminal values.
//! How an operator node updates the verdict depends on which of its
//! children are leaves:
//!
//! - **AND, two leaves**: the verdict drops to `false` unless the line
//!   contains both terms.
//! - **AND, one operator child**: while the verdict is still `true`, the
//!   line must contain the leaf child's term or the verdict drops.
//! - **OR, two leaves**: the verdict drops to `false` when the line
//!   contains neither term.
//! - **OR, one operator child**: while the verdict is `false`, the leaf
//!   child's term can raise it back to `true`.
//!
//! A node whose children are both operators offers no terminal value to
//! compare. Such a subtree is resolved on its own, bottom-up (a leaf is a
//! containment test, an operator combines its children), its verdict folds in
//! like the two-leaves case, and the walk does not descend further, since
//! descending would let the later visits clobber the folded verdict.
//!
//! The walk completes unconditionally; the threaded verdict at the end is
//! the answer.

use crate::tree::{ExprNode, OpKind};

/// Evaluates a compiled tree against one line.
///
/// Unless `match_case` is set, both the line and every term are lowercased
/// before the plain substring containment test.
pub(crate) fn evaluate(root: &ExprNode, line: &str, match_case: bool) -> bool {
    let folded;
    let line = if match_case {
        line
    } else {
        folded = line.to_lowercase();
        folded.as_str()
    };

    match root {
        // A lone term never drives the walk (leaves are silent), so it is
        // tested directly.
        ExprNode::Leaf(term) => contains(line, term, match_case),
        _ => walk(root, line, match_case, true),
    }
}

/// Substring containment. The line is already case-folded by [`evaluate`];
/// terms are folded here to match.
fn contains(line: &str, term: &str, match_case: bool) -> bool {
    if match_case {
        line.contains(term)
    } else {
        line.contains(&term.to_lowercase())
    }
}

/// The in-order walk. Returns the updated verdict.
fn walk(node: &ExprNode, line: &str, match_case: bool, verdict: bool) -> bool {
    let ExprNode::Op { kind, left, right } = node else {
        return verdict;
    };

    if left.is_op() && right.is_op() {
        let group = match kind {
            OpKind::And => resolve(left, line, match_case) && resolve(right, line, match_case),
            OpKind::Or => resolve(left, line, match_case) || resolve(right, line, match_case),
        };
        return verdict && group;
    }

    let verdict = walk(left, line, match_case, verdict);
    let verdict = apply(*kind, left, right, line, match_case, verdict);
    walk(right, line, match_case, verdict)
}

/// Updates the verdict for one operator node whose children are not both
/// operators.
fn apply(
    kind: OpKind,
    left: &ExprNode,
    right: &ExprNode,
    line: &str,
    match_case: bool,
    verdict: bool,
) -> bool {
    match (kind, left, right) {
        (OpKind::And, ExprNode::Leaf(l), ExprNode::Leaf(r)) => {
            if !contains(line, l, match_case) || !contains(line, r, match_case) {
                false
            } else {
                verdict
            }
        }
        (OpKind::And, ExprNode::Op { .. }, ExprNode::Leaf(r)) => {
            if verdict && !contains(line, r, match_case) {
                false
            } else {
                verdict
            }
        }
        (OpKind::And, ExprNode::Leaf(l), ExprNode::Op { .. }) => {
            if verdict && !contains(line, l, match_case) {
                false
            } else {
                verdict
            }
        }
        (OpKind::Or, ExprNode::Leaf(l), ExprNode::Leaf(r)) => {
            if !contains(line, l, match_case) && !contains(line, r, match_case) {
                false
            } else {
                verdict
            }
        }
        (OpKind::Or, ExprNode::Op { .. }, ExprNode::Leaf(r)) => {
            if !verdict && contains(line, r, match_case) {
                true
            } else {
                verdict
            }
        }
        (OpKind::Or, ExprNode::Leaf(l), ExprNode::Op { .. }) => {
            if !verdict && contains(line, l, match_case) {
                true
            } else {
                verdict
            }
        }
        // Both children operators: handled by the caller before descending.
        (_, ExprNode::Op { .. }, ExprNode::Op { .. }) => verdict,
    }
}

/// Bottom-up resolution of a self-contained subtree.
fn resolve(node: &ExprNode, line: &str, match_case: bool) -> bool {
    match node {
        ExprNode::Leaf(term) => contains(line, term, match_case),
        ExprNode::Op {
            kind: OpKind::And,
            left,
            right,
        } => resolve(left, line, match_case) && resolve(right, line, match_case),
        ExprNode::Op {
            kind: OpKind::Or,
            left,
            right,
        } => resolve(left, line, match_case) || resolve(right, line, match_case),
    }
}
