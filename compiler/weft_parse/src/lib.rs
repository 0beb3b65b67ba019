//! Recursive descent parser for Weft.
//!
//! Consumes a [`TokenList`] and produces a single root [`Node`]: the lone
//! statement, or a [`Node::Block`] when the program has several.
//!
//! The security policy is consulted the moment a method name is read, before
//! its arguments, so an AST containing a rejected name is never built.
//! Nesting and chain length are bounded by [`ParseOptions`].

mod cursor;
mod error;
mod grammar;
mod options;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind, ParseFailure};
pub use options::ParseOptions;

use tracing::{debug, warn};
use weft_ir::{Block, Keyword, Node, Span, Token, TokenKind, TokenList};
use weft_policy::{SecurityError, SecurityPolicy};

/// Result type for parser internals.
pub type ParseResult<T> = Result<T, ParseFailure>;

/// Parse `tokens` into a root node.
pub fn parse(
    tokens: &TokenList,
    policy: &SecurityPolicy,
    options: &ParseOptions,
) -> ParseResult<Node> {
    Parser::new(tokens, policy, *options).parse_program()
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    policy: &'a SecurityPolicy,
    options: ParseOptions,
    tokens: &'a TokenList,
    /// Open argument lists, blocks and parentheses on the current path.
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, policy: &'a SecurityPolicy, options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            policy,
            options,
            tokens,
            depth: 0,
        }
    }

    /// Parse a whole program.
    pub fn parse_program(mut self) -> ParseResult<Node> {
        self.reject_suspicious_punctuation()?;

        self.skip_separators();
        if self.is_at_end() {
            return Err(ParseError::empty_input(self.current_span()).into());
        }

        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
            self.skip_separators();
        }
        debug!(statements = statements.len(), "parsed program");

        if statements.len() == 1 {
            if let Some(only) = statements.pop() {
                return Ok(only);
            }
        }
        let span = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => first.span().merge(last.span()),
            _ => Span::DUMMY,
        };
        Ok(Node::Block(Block { statements, span }))
    }

    /// Shell-significant punctuation is rejected wherever it appears, before
    /// any grammar error could mask it.
    fn reject_suspicious_punctuation(&self) -> ParseResult<()> {
        for token in self.tokens {
            if let TokenKind::Punctuation(c) = token.kind {
                SecurityPolicy::check_punctuation(c, token.span).map_err(log_rejection)?;
            }
        }
        Ok(())
    }

    /// Enter an argument list, block or parenthesised expression opened at
    /// `open`.
    fn enter_nesting(&mut self, open: Span) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(ParseError::nesting_too_deep(
                open,
                self.options.max_depth,
                self.current_kind(),
            ));
        }
        Ok(())
    }

    fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Consume the closing punctuation `close` of a delimiter opened at
    /// `open`.
    fn expect_closing(&mut self, close: char, open: Span, expected: &str) -> Result<(), ParseError> {
        if self.check_punct(close) {
            self.advance();
            return Ok(());
        }
        let span = self.current_span();
        if self.is_at_end() {
            Err(ParseError::unclosed(span, open, expected, self.current_kind()))
        } else {
            Err(ParseError::unexpected(span, expected, self.current_kind()))
        }
    }

    // Cursor delegation

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check_punct(&self, c: char) -> bool {
        self.cursor.check_punct(c)
    }

    #[inline]
    fn check_keyword(&self, kw: Keyword) -> bool {
        self.cursor.check_keyword(kw)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn skip_separators(&mut self) {
        self.cursor.skip_separators();
    }
}

/// Every policy rejection is logged once, where the parser meets it.
pub(crate) fn log_rejection(err: SecurityError) -> SecurityError {
    warn!(
        name = %err.name,
        span = %err.span,
        violation = %err.violation,
        "rejected by security policy"
    );
    err
}

#[cfg(test)]
mod tests;
