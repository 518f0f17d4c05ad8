//! Query tokenization and canonicalization.
//!
//! A raw query like `"(foo OR bar) AND baz"` is taken apart twice:
//!
//! - [`operands`] extracts the literal search terms in appearance order,
//! - [`canonical`] rewrites the whole expression into a compact
//!   single-character form (`(0|1)&2`) where each term is a decimal digit
//!   and each operator a single symbol.
//!
//! The canonical string is what the precedence converter consumes; the
//! operand list is how tree leaves recover their literal text.

use crate::error::QueryError;

/// The four recognized operator spellings, matched as standalone words.
pub(crate) fn is_operator_word(word: &str) -> bool {
    matches!(word, "AND" | "OR" | "&&" | "||")
}

fn operator_symbol(word: &str) -> char {
    match word {
        "AND" | "&&" => '&',
        _ => '|',
    }
}

/// Extracts the operand terms in appearance order.
///
/// Words between operators belong to one operand and are rejoined with
/// single spaces, so extra internal whitespace never changes the result.
/// Parentheses attached to a word are grouping syntax, not term text.
pub(crate) fn operands(query: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in query.split_whitespace() {
        if is_operator_word(word) {
            if !current.is_empty() {
                terms.push(current.join(" "));
                current.clear();
            }
        } else {
            let core = word.trim_start_matches('(').trim_end_matches(')');
            if !core.is_empty() {
                current.push(core);
            }
        }
    }
    if !current.is_empty() {
        terms.push(current.join(" "));
    }

    terms
}

/// Rewrites the query into its canonical single-character form.
///
/// Term indices are assigned sequentially: one digit is emitted for each
/// operator encountered plus one for the trailing term, so a malformed
/// query (e.g. a trailing operator) emits a digit with no matching term;
/// the tree builder reports that as [`QueryError::UnknownOperand`].
/// Parentheses travel attached to operand words and are re-emitted around
/// the operand's digit.
pub(crate) fn canonical(query: &str) -> Result<String, QueryError> {
    let digits = query
        .split_whitespace()
        .filter(|w| is_operator_word(w))
        .count()
        + 1;
    if digits > 10 {
        return Err(QueryError::TooManyOperands { count: digits });
    }

    let mut result = String::new();
    let mut index = 0u32;
    // Parenthesis runs seen on the current operand's words, re-emitted
    // around the digit when the operand is flushed.
    let mut open = 0;
    let mut close = 0;

    let mut flush = |result: &mut String, open: &mut usize, close: &mut usize| {
        for _ in 0..*open {
            result.push('(');
        }
        if let Some(digit) = char::from_digit(index, 10) {
            result.push(digit);
        }
        index += 1;
        for _ in 0..*close {
            result.push(')');
        }
        *open = 0;
        *close = 0;
    };

    for word in query.split_whitespace() {
        if is_operator_word(word) {
            flush(&mut result, &mut open, &mut close);
            result.push(operator_symbol(word));
        } else {
            let after_open = word.trim_start_matches('(');
            let core = after_open.trim_end_matches(')');
            open += word.len() - after_open.len();
            close += after_open.len() - core.len();
        }
    }
    flush(&mut result, &mut open, &mut close);

    Ok(result)
}
