//! Property-based tests for query parsing and evaluation using proptest.

use proptest::prelude::*;

use linesift::Query;

// ============================================================================
// Test helpers
// ============================================================================

/// Lowercase ASCII words that can never collide with an operator spelling.
fn term_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,8}".prop_map(String::from)
}

fn terms_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(term_strategy(), 2..=max)
}

/// Builds a line holding the selected terms plus some noise.
fn line_for(terms: &[String], include: &[bool], noise: &str) -> String {
    let mut words: Vec<&str> = vec![noise];
    for (term, include) in terms.iter().zip(include) {
        if *include {
            words.push(term);
        }
    }
    words.join(" ")
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A single AND over two terms follows the textbook truth table for
    /// substring containment.
    #[test]
    fn and_matches_truth_table(
        (a, b) in (term_strategy(), term_strategy()),
        include in prop::array::uniform2(any::<bool>()),
        noise in "[m-z]{0,6}",
    ) {
        let terms = vec![a.clone(), b.clone()];
        let line = line_for(&terms, &include, &noise);

        let query = Query::parse(&format!("{a} AND {b}")).unwrap();
        let expected = line.contains(&a) && line.contains(&b);
        prop_assert_eq!(query.matches(&line, false), expected);
    }

    /// A single OR over two terms follows the textbook truth table.
    #[test]
    fn or_matches_truth_table(
        (a, b) in (term_strategy(), term_strategy()),
        include in prop::array::uniform2(any::<bool>()),
        noise in "[m-z]{0,6}",
    ) {
        let terms = vec![a.clone(), b.clone()];
        let line = line_for(&terms, &include, &noise);

        let query = Query::parse(&format!("{a} OR {b}")).unwrap();
        let expected = line.contains(&a) || line.contains(&b);
        prop_assert_eq!(query.matches(&line, false), expected);
    }

    /// Left-chained ANDs agree with the folded boolean over containment.
    #[test]
    fn and_chain_agrees_with_all(
        terms in terms_strategy(5),
        seed in any::<u64>(),
        noise in "[m-z]{0,6}",
    ) {
        let include: Vec<bool> = (0..terms.len()).map(|i| seed >> i & 1 == 1).collect();
        let line = line_for(&terms, &include, &noise);

        let query = Query::parse(&terms.join(" AND ")).unwrap();
        let expected = terms.iter().all(|t| line.contains(t));
        prop_assert_eq!(query.matches(&line, false), expected);
    }

    /// Left-chained ORs agree with the folded boolean over containment.
    #[test]
    fn or_chain_agrees_with_any(
        terms in terms_strategy(5),
        seed in any::<u64>(),
        noise in "[m-z]{0,6}",
    ) {
        let include: Vec<bool> = (0..terms.len()).map(|i| seed >> i & 1 == 1).collect();
        let line = line_for(&terms, &include, &noise);

        let query = Query::parse(&terms.join(" OR ")).unwrap();
        let expected = terms.iter().any(|t| line.contains(t));
        prop_assert_eq!(query.matches(&line, false), expected);
    }

    /// `(a OR b) AND c` follows the grouped boolean.
    #[test]
    fn grouped_or_under_and(
        (a, b, c) in (term_strategy(), term_strategy(), term_strategy()),
        include in prop::array::uniform3(any::<bool>()),
        noise in "[m-z]{0,6}",
    ) {
        let terms = vec![a.clone(), b.clone(), c.clone()];
        let line = line_for(&terms, &include, &noise);

        let query = Query::parse(&format!("({a} OR {b}) AND {c}")).unwrap();
        let expected = (line.contains(&a) || line.contains(&b)) && line.contains(&c);
        prop_assert_eq!(query.matches(&line, false), expected);
    }

    /// `(a AND b) OR (c AND d)` follows the grouped boolean.
    #[test]
    fn grouped_and_under_or(
        (a, b, c, d) in (term_strategy(), term_strategy(), term_strategy(), term_strategy()),
        include in prop::array::uniform4(any::<bool>()),
        noise in "[m-z]{0,6}",
    ) {
        let terms = vec![a.clone(), b.clone(), c.clone(), d.clone()];
        let line = line_for(&terms, &include, &noise);

        let query = Query::parse(&format!("({a} AND {b}) OR ({c} AND {d})")).unwrap();
        let expected = (line.contains(&a) && line.contains(&b))
            || (line.contains(&c) && line.contains(&d));
        prop_assert_eq!(query.matches(&line, false), expected);
    }

    /// Case-insensitive matching ignores case changes on either side.
    #[test]
    fn case_insensitive_both_ways(
        term in "[a-zA-Z]{2,8}".prop_filter(
            "term must not spell an operator",
            |t| !matches!(t.to_uppercase().as_str(), "AND" | "OR"),
        ),
        prefix in "[m-z]{0,5}",
    ) {
        let line = format!("{prefix} {term}");

        let upper = Query::parse(&term.to_uppercase()).unwrap();
        let lower = Query::parse(&term.to_lowercase()).unwrap();

        prop_assert!(upper.matches(&line, false));
        prop_assert!(lower.matches(&line, false));
        prop_assert!(upper.matches(&line.to_uppercase(), false));
        prop_assert!(lower.matches(&line.to_uppercase(), false));
    }

    /// Parsing the same query twice yields identical verdicts everywhere.
    #[test]
    fn parse_is_idempotent(
        terms in terms_strategy(4),
        seed in any::<u64>(),
        lines in prop::collection::vec("[a-z ]{0,20}", 1..8),
    ) {
        let ops = ["AND", "OR", "&&", "||"];
        let mut input = terms[0].clone();
        for (i, term) in terms.iter().enumerate().skip(1) {
            let op = ops[(seed as usize >> i) % ops.len()];
            input.push_str(&format!(" {op} {term}"));
        }

        let first = Query::parse(&input).unwrap();
        let second = Query::parse(&input).unwrap();
        for line in &lines {
            prop_assert_eq!(first.matches(line, false), second.matches(line, false));
            prop_assert_eq!(first.matches(line, true), second.matches(line, true));
        }
    }

    /// Operand extraction is unaffected by the amount of whitespace.
    #[test]
    fn operand_extraction_is_whitespace_insensitive(
        terms in terms_strategy(4),
        pads in prop::collection::vec(1usize..4, 8),
    ) {
        let mut compact = terms[0].clone();
        let mut padded = terms[0].clone();
        for (i, term) in terms.iter().enumerate().skip(1) {
            compact.push_str(&format!(" AND {term}"));
            let pad = " ".repeat(pads[i % pads.len()]);
            padded.push_str(&format!("{pad}AND{pad}{term}"));
        }

        let compact = Query::parse(&compact).unwrap();
        let padded = Query::parse(&padded).unwrap();
        prop_assert_eq!(compact.operands(), padded.operands());
    }

    /// Parsing arbitrary printable garbage returns a Result, never panics.
    #[test]
    fn parse_never_panics(input in "[ -~]{0,40}") {
        let _ = Query::parse(&input);
    }
}
