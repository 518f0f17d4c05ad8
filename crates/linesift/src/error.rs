//! Error types for the linesift crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing a query expression.
///
/// All of these are construction-time failures: a [`Query`](crate::Query)
/// that parses successfully never fails during evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The query contains no search terms at all.
    #[error("query contains no search terms")]
    Empty,

    /// The canonical single-character encoding maps one term to one decimal
    /// digit, so a query can hold at most ten terms.
    #[error("query has {count} terms; at most 10 are supported")]
    TooManyOperands { count: usize },

    /// The expression refers to a term that was never extracted, which
    /// happens when operators outnumber the terms around them
    /// (e.g. `"foo AND"`).
    #[error("expression refers to term #{index}, but only {count} terms were extracted")]
    UnknownOperand { index: usize, count: usize },

    /// An operator had fewer than two operands to combine.
    #[error("operator is missing an operand")]
    MissingOperand,

    /// The expression did not reduce to a single tree.
    #[error("expression left {remaining} unconnected fragments")]
    Unbalanced { remaining: usize },
}

/// A failure opening or reading one search source.
///
/// During a directory scan these are collected per file rather than
/// aborting the scan; see [`DirectoryScan`](crate::DirectoryScan).
#[derive(Debug, Error)]
pub enum ScanError {
    /// The underlying file or stream could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
