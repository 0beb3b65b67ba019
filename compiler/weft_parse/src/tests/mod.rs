//! Parser tests.
//!
//! - `parser`: tree shapes for calls, chains, arguments, blocks and literals
//! - `security`: policy rejections in every call position
//! - `limits`: nesting and chain-length boundaries, structural errors

#![allow(clippy::unwrap_used, clippy::expect_used)]


use crate::{parse, ParseFailure, ParseOptions};
use weft_ir::Node;
use weft_policy::SecurityPolicy;

fn parse_with(source: &str, policy: &SecurityPolicy, options: &ParseOptions) -> Result<Node, ParseFailure> {
    let tokens = weft_lexer::tokenize(source).unwrap();
    parse(&tokens, policy, options)
}

fn parse_src(source: &str) -> Result<Node, ParseFailure> {
    parse_with(source, &SecurityPolicy::denylist_only(), &ParseOptions::default())
}

fn parse_ok(source: &str) -> Node {
    match parse_src(source) {
        Ok(node) => node,
        Err(err) => panic!("failed to parse {source:?}: {err}"),
    }
}
