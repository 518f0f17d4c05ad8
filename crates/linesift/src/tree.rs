//! The compiled expression tree.
//!
//! A parsed query is a binary tree of operand leaves and operator nodes,
//! built bottom-up from the postfix form. The tree is uniquely owned by
//! its [`Query`](crate::Query), built once, and never mutated afterwards,
//! so a parsed query is freely shareable across threads.

use crate::error::QueryError;

/// The boolean connective of an operator node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Both sides must hold.
    And,
    /// At least one side must hold.
    Or,
}

impl OpKind {
    fn from_symbol(symbol: char) -> Option<OpKind> {
        match symbol {
            '&' => Some(OpKind::And),
            '|' => Some(OpKind::Or),
            _ => None,
        }
    }

    /// Returns the word spelling of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            OpKind::And => "AND",
            OpKind::Or => "OR",
        }
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One node of a compiled expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode {
    /// A literal search term, tested by substring containment.
    Leaf(String),
    /// A boolean combination of two subtrees.
    Op {
        kind: OpKind,
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },
}

impl ExprNode {
    /// Returns `true` for operator nodes.
    pub fn is_op(&self) -> bool {
        matches!(self, ExprNode::Op { .. })
    }
}

/// Builds the expression tree from a postfix string and the operand list.
///
/// Digits become leaves holding `operands[digit]`; an operator pops two
/// nodes, the first popped becoming its `right` child and the second its
/// `left`. A well-formed postfix string leaves exactly one node, the
/// root. Underflow, dangling operand indices, and leftover fragments are
/// surfaced as [`QueryError`]s rather than panics.
pub(crate) fn build(postfix: &str, operands: &[String]) -> Result<ExprNode, QueryError> {
    let mut stack: Vec<ExprNode> = Vec::new();

    for symbol in postfix.chars() {
        if let Some(kind) = OpKind::from_symbol(symbol) {
            let right = stack.pop().ok_or(QueryError::MissingOperand)?;
            let left = stack.pop().ok_or(QueryError::MissingOperand)?;
            stack.push(ExprNode::Op {
                kind,
                left: Box::new(left),
                right: Box::new(right),
            });
        } else if let Some(digit) = symbol.to_digit(10) {
            let index = digit as usize;
            let term = operands.get(index).ok_or(QueryError::UnknownOperand {
                index,
                count: operands.len(),
            })?;
            stack.push(ExprNode::Leaf(term.clone()));
        }
        // Any other character is a stray parenthesis from unbalanced
        // input; the leftover check below reports the damage.
    }

    let root = stack.pop().ok_or(QueryError::MissingOperand)?;
    if !stack.is_empty() {
        return Err(QueryError::Unbalanced {
            remaining: stack.len() + 1,
        });
    }
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn single_leaf() {
        let root = build("0", &terms(&["foo"])).unwrap();
        assert_eq!(root, ExprNode::Leaf("foo".to_string()));
    }

    #[test]
    fn first_pop_is_right_child() {
        let root = build("01&", &terms(&["foo", "bar"])).unwrap();
        let ExprNode::Op { kind, left, right } = root else {
            panic!("expected operator root");
        };
        assert_eq!(kind, OpKind::And);
        assert_eq!(*left, ExprNode::Leaf("foo".to_string()));
        assert_eq!(*right, ExprNode::Leaf("bar".to_string()));
    }

    #[test]
    fn left_chain_nests_on_the_left() {
        let root = build("01&2&", &terms(&["a", "b", "c"])).unwrap();
        let ExprNode::Op { left, right, .. } = root else {
            panic!("expected operator root");
        };
        assert!(left.is_op());
        assert_eq!(*right, ExprNode::Leaf("c".to_string()));
    }

    #[test]
    fn underflow_is_reported() {
        assert_eq!(build("0&", &terms(&["a"])), Err(QueryError::MissingOperand));
        assert_eq!(build("&", &terms(&["a"])), Err(QueryError::MissingOperand));
        assert_eq!(build("", &terms(&["a"])), Err(QueryError::MissingOperand));
    }

    #[test]
    fn dangling_index_is_reported() {
        assert_eq!(
            build("01&", &terms(&["a"])),
            Err(QueryError::UnknownOperand { index: 1, count: 1 })
        );
    }

    #[test]
    fn leftover_fragments_are_reported() {
        assert_eq!(
            build("01", &terms(&["a", "b"])),
            Err(QueryError::Unbalanced { remaining: 2 })
        );
    }
}
