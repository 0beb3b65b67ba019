//! Primary expressions: calls, literals and parentheses.

use crate::{log_rejection, ParseError, ParseResult, Parser};
use weft_ir::{Literal, LiteralKind, Node, TokenKind};
use weft_policy::SecurityPolicy;

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Node> {
        match self.current_kind() {
            TokenKind::Identifier(_) => Ok(Node::MethodCall(self.parse_call(None)?)),
            TokenKind::StringLiteral(_)
            | TokenKind::NumberLiteral(_)
            | TokenKind::SymbolLiteral(_)
            | TokenKind::BooleanLiteral(_)
            | TokenKind::NilLiteral => self.parse_literal(),
            TokenKind::Punctuation('(') => self.parse_parenthesized(),
            found => Err(ParseError::expected_expression(self.current_span(), found).into()),
        }
    }

    fn parse_literal(&mut self) -> ParseResult<Node> {
        let token = self.current();
        let kind = match &token.kind {
            TokenKind::StringLiteral(value) => {
                if self.options.strict_literals {
                    SecurityPolicy::check_literal(value, token.span).map_err(log_rejection)?;
                }
                LiteralKind::String(value.clone())
            }
            TokenKind::NumberLiteral(n) => LiteralKind::Number(*n),
            TokenKind::SymbolLiteral(name) => LiteralKind::Symbol(name.clone()),
            TokenKind::BooleanLiteral(b) => LiteralKind::Boolean(*b),
            TokenKind::NilLiteral => LiteralKind::Nil,
            found => return Err(ParseError::expected_expression(token.span, found).into()),
        };
        self.advance();
        Ok(Node::Literal(Literal {
            kind,
            span: token.span,
        }))
    }

    /// `( chain )`; the parentheses leave no trace in the tree.
    fn parse_parenthesized(&mut self) -> ParseResult<Node> {
        let open = self.current_span();
        self.advance();
        self.enter_nesting(open)?;
        let inner = self.parse_chain()?;
        self.expect_closing(')', open, "`)`")?;
        self.exit_nesting();
        Ok(inner)
    }
}
