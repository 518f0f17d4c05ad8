//! Linesift - boolean substring queries over lines of text.
//!
//! Linesift compiles a small boolean query language (literal search terms
//! combined with `AND`/`OR` and parenthesized grouping) and evaluates it
//! against lines of text: single strings, file contents, or the files of a
//! directory.
//!
//! # Quick Start
//!
//! ```rust
//! use linesift::Query;
//!
//! let query = Query::parse("(timeout OR refused) AND connection")?;
//!
//! // Single lines
//! assert!(query.matches("connection timeout on eth0", false));
//! assert!(!query.matches("connection established", false));
//!
//! // Whole readers, with 1-based line numbers
//! let log = "connection refused\nlink up\nconnection timeout\n";
//! let results = query.scan_reader(log.as_bytes(), false)?;
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[1].line_number, 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Query Grammar
//!
//! Terms are separated by the operator words `AND` and `OR` (the symbolic
//! spellings `&&` and `||` are equivalent); parentheses group explicitly
//! and `AND` binds tighter than `OR`:
//!
//! ```text
//! error AND (disk OR network)
//! warn || error
//! ```
//!
//! A run of words between two operators is one term, matched as a single
//! space-joined substring. Matching is plain containment (no word
//! boundaries, no regular expressions) and is case-insensitive unless
//! asked otherwise. There is no `NOT`.
//!
//! # Compilation Pipeline
//!
//! Parsing flows one way: the raw query is split into terms and a compact
//! single-character canonical form, the canonical form is converted to
//! postfix by operator precedence, and the postfix stream is folded into a
//! binary expression tree. The tree is built once and reused, unchanged,
//! for every line evaluated.

mod error;
mod eval;
mod postfix;
mod query;
mod scan;
mod token;
mod tree;

// Re-export public API
pub use error::{QueryError, ScanError};
pub use query::Query;
pub use scan::{DirectoryScan, SearchResult};
pub use tree::{ExprNode, OpKind};
