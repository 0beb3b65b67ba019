//! Property-based tests for the parser.
//!
//! Generated programs check that parsing is deterministic, never panics,
//! and that a denylisted name is rejected wherever it is spliced in.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use weft_lexer::tokenize;
use weft_parse::{parse, ParseFailure, ParseOptions};
use weft_policy::{denylist, is_denylisted, SecurityPolicy, SecurityViolation};

// ============================================================================
// Strategies
// ============================================================================

/// Lowercase method names that pass the policy.
fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}".prop_filter("denylisted", |name| {
        !is_denylisted(name) && !matches!(name.as_str(), "do" | "end" | "true" | "false" | "nil")
    })
}

fn arb_literal() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1000i64..1000).prop_map(|n| n.to_string()),
        (0.0f64..100.0).prop_map(|f| format!("{f:.2}")),
        "[a-zA-Z0-9 ]{0,12}".prop_map(|s| format!("\"{s}\"")),
        "[a-z_]{1,8}".prop_map(|s| format!(":{s}")),
        Just("true".to_owned()),
        Just("nil".to_owned()),
    ]
}

/// Calls with literal arguments, optional chains and optional blocks.
fn arb_statement() -> impl Strategy<Value = String> {
    let leaf = (arb_name(), prop::collection::vec(arb_literal(), 0..3))
        .prop_map(|(name, args)| format!("{name}({})", args.join(", ")));
    leaf.prop_recursive(4, 24, 4, |inner| {
        prop_oneof![
            (inner.clone(), prop::collection::vec(arb_name(), 1..3))
                .prop_map(|(base, links)| format!("{base}.{}", links.join("."))),
            (arb_name(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(name, body)| format!("{name} do\n{}\nend", body.join("\n"))),
            (arb_name(), arb_name(), inner)
                .prop_map(|(name, key, value)| format!("{name}({key}: {value})")),
        ]
    })
}

fn arb_program() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_statement(), 1..4).prop_map(|stmts| stmts.join("\n"))
}

fn parse_source(source: &str) -> Result<weft_ir::Node, ParseFailure> {
    let tokens = tokenize(source).unwrap();
    parse(&tokens, &SecurityPolicy::denylist_only(), &ParseOptions::default())
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Parser never panics on arbitrary input.
    #[test]
    fn parser_no_panic(input in ".{0,100}") {
        if let Ok(tokens) = tokenize(&input) {
            let _result = parse(&tokens, &SecurityPolicy::denylist_only(), &ParseOptions::default());
        }
    }

    /// Generated programs parse, and parsing twice gives equal trees.
    #[test]
    fn generated_programs_parse_deterministically(source in arb_program()) {
        let first = parse_source(&source);
        prop_assert!(first.is_ok(), "failed on {}: {:?}", source, first);
        prop_assert_eq!(first, parse_source(&source));
    }

    /// A denied name spliced into a valid program is always a security error.
    #[test]
    fn denied_names_rejected_anywhere(
        source in arb_program(),
        index in 0..denylist().len(),
        position in 0usize..3,
    ) {
        let denied = denylist()[index];
        let spliced = match position {
            0 => format!("{denied}\n{source}"),
            1 => format!("{source}.{denied}"),
            _ => format!("vstack do\n{source}\n{denied}(1)\nend"),
        };
        let result = parse_source(&spliced);
        let is_security = matches!(&result, Err(ParseFailure::Security(err))
            if matches!(err.violation, SecurityViolation::DeniedMethod | SecurityViolation::DunderMethod));
        prop_assert!(is_security, "not rejected: {}", spliced);
    }
}
