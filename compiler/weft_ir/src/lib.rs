//! Weft IR - shared data types for the Weft interpreter.
//!
//! - [`Span`]: byte ranges into the source text
//! - [`Token`], [`TokenKind`], [`TokenList`]: lexer output
//! - [`Node`] and friends: parser output, consumed by the executor

pub mod ast;
mod span;
mod token;

pub use ast::{Argument, Block, Literal, LiteralKind, MethodCall, Node};
pub use span::{Span, SpanError};
pub use token::{Keyword, Number, Token, TokenKind, TokenList};
