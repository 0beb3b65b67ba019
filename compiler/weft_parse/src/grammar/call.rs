//! Method calls, argument lists and blocks.

use crate::{log_rejection, ParseError, ParseResult, Parser};
use rustc_hash::FxHashSet;
use tracing::trace;
use weft_ir::{Argument, Block, Keyword, MethodCall, Node, Span, TokenKind};

/// What ends a block body.
#[derive(Copy, Clone)]
enum BlockClose {
    End,
    Brace,
}

impl Parser<'_> {
    /// `IDENT ( '(' args? ')' )? block?`
    ///
    /// The name goes through the security policy before anything after it
    /// is looked at.
    pub(crate) fn parse_call(&mut self, receiver: Option<Box<Node>>) -> ParseResult<MethodCall> {
        let token = self.current();
        let TokenKind::Identifier(name) = &token.kind else {
            return Err(ParseError::expected_identifier(token.span, &token.kind).into());
        };
        self.policy
            .check_method(name, token.span)
            .map_err(log_rejection)?;
        trace!(method = %name, chained = receiver.is_some(), "parse_call");
        self.advance();

        let args = if self.check_punct('(') {
            self.parse_args()?
        } else {
            Vec::new()
        };
        let block = if self.check_keyword(Keyword::Do) || self.check_punct('{') {
            Some(self.parse_block()?)
        } else {
            None
        };

        let start = receiver.as_ref().map_or(token.span.start, |r| r.span().start);
        Ok(MethodCall {
            receiver,
            method: name.clone(),
            args,
            block,
            span: Span::new(start, self.previous_span().end),
        })
    }

    /// `'(' ( arg ( ',' arg )* ','? )? ')'`
    fn parse_args(&mut self) -> ParseResult<Vec<Argument>> {
        let open = self.current_span();
        self.advance();
        self.enter_nesting(open)?;

        let mut args = Vec::new();
        let mut named_keys: FxHashSet<&str> = FxHashSet::default();
        while !self.check_punct(')') && !self.is_at_end() {
            let key_token = self.current();
            if let (TokenKind::Identifier(key), true) =
                (&key_token.kind, self.cursor.peek_kind().is_punct(':'))
            {
                if !named_keys.insert(key.as_str()) {
                    return Err(ParseError::duplicate_named_argument(key_token.span, key).into());
                }
                self.advance();
                self.advance();
                let value = self.parse_chain()?;
                let span = key_token.span.merge(value.span());
                args.push(Argument::Named {
                    key: key.clone(),
                    value,
                    span,
                });
            } else {
                if !named_keys.is_empty() {
                    return Err(ParseError::positional_after_named(
                        key_token.span,
                        &key_token.kind,
                    )
                    .into());
                }
                args.push(Argument::Positional(self.parse_chain()?));
            }

            if self.check_punct(',') {
                self.advance();
            } else {
                break;
            }
        }

        self.expect_closing(')', open, "`,` or `)`")?;
        self.exit_nesting();
        Ok(args)
    }

    /// `do body end` or `{ body }`.
    fn parse_block(&mut self) -> ParseResult<Block> {
        let open = self.current_span();
        let close = if self.check_keyword(Keyword::Do) {
            BlockClose::End
        } else {
            BlockClose::Brace
        };
        self.advance();
        self.enter_nesting(open)?;

        let mut statements = Vec::new();
        loop {
            self.skip_separators();
            if self.at_block_close(close) {
                break;
            }
            if self.is_at_end() {
                let expected = match close {
                    BlockClose::End => "`end`",
                    BlockClose::Brace => "`}`",
                };
                return Err(ParseError::unclosed(
                    self.current_span(),
                    open,
                    expected,
                    self.current_kind(),
                )
                .into());
            }
            statements.push(self.parse_statement()?);
        }

        let end = self.advance().span;
        self.exit_nesting();
        trace!(statements = statements.len(), "parse_block");
        Ok(Block {
            statements,
            span: open.merge(end),
        })
    }

    fn at_block_close(&self, close: BlockClose) -> bool {
        match close {
            BlockClose::End => self.check_keyword(Keyword::End),
            BlockClose::Brace => self.check_punct('}'),
        }
    }
}
