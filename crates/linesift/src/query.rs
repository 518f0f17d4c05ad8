//! Query parsing and single-line evaluation.

use crate::error::QueryError;
use crate::eval;
use crate::postfix;
use crate::token;
use crate::tree::{self, ExprNode};

/// A parsed boolean query over substring terms.
///
/// A query combines literal search terms with `AND`/`OR` (the symbolic
/// spellings `&&`/`||` work too) and parenthesized grouping; `AND` binds
/// tighter than `OR`. Parsing compiles the expression into a binary tree
/// once; evaluation reuses the tree unchanged for every line, so a query
/// can be shared freely across threads.
///
/// # Example
///
/// ```
/// use linesift::Query;
///
/// let query = Query::parse("(timeout OR refused) AND connection")?;
///
/// assert!(query.matches("connection timeout on eth0", false));
/// assert!(query.matches("Connection REFUSED", false));
/// assert!(!query.matches("connection established", false));
/// # Ok::<(), linesift::QueryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    raw: String,
    operands: Vec<String>,
    root: ExprNode,
}

impl Query {
    /// Parses a query expression and compiles its expression tree.
    ///
    /// # Errors
    ///
    /// Fails when the query yields no search terms, holds more than ten,
    /// or is too malformed to reduce to a single tree. No partial tree
    /// escapes a failed parse.
    pub fn parse(input: &str) -> Result<Query, QueryError> {
        let operands = token::operands(input);
        if operands.is_empty() {
            return Err(QueryError::Empty);
        }

        let canonical = token::canonical(input)?;
        let postfix = postfix::infix_to_postfix(&canonical);
        let root = tree::build(&postfix, &operands)?;

        Ok(Query {
            raw: input.to_string(),
            operands,
            root,
        })
    }

    /// Tests one line against the query.
    ///
    /// Unless `match_case` is set, the comparison is case-insensitive on
    /// both sides. Terms match by plain substring containment, not word
    /// boundaries.
    pub fn matches(&self, line: &str, match_case: bool) -> bool {
        eval::evaluate(&self.root, line, match_case)
    }

    /// Returns the raw query string as supplied to [`parse`](Self::parse).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the literal search terms in appearance order.
    pub fn operands(&self) -> &[String] {
        &self.operands
    }

    /// Returns the root of the compiled expression tree.
    pub fn root(&self) -> &ExprNode {
        &self.root
    }
}
