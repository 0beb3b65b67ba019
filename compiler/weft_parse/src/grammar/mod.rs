//! Grammar productions.
//!
//! ```text
//! program    := statement ( ';'* statement )* ';'* EOF
//! statement  := chain
//! chain      := primary ( '.' call )*
//! primary    := call | literal | '(' chain ')'
//! call       := IDENT ( '(' args? ')' )? block?
//! args       := arg ( ',' arg )* ','?
//! arg        := IDENT ':' chain | chain
//! block      := 'do' body 'end' | '{' body '}'
//! body       := ( ';'* statement )* ';'*
//! literal    := STRING | NUMBER | SYMBOL | true | false | nil
//! ```

mod call;
mod primary;

use crate::{ParseError, ParseResult, Parser};
use tracing::trace;
use weft_ir::Node;
use weft_stack::ensure_sufficient_stack;

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Node> {
        trace!(pos = self.cursor.position(), "parse_statement");
        self.parse_chain()
    }

    /// `primary ( '.' call )*`, left-associative.
    pub(crate) fn parse_chain(&mut self) -> ParseResult<Node> {
        ensure_sufficient_stack(|| self.parse_chain_inner())
    }

    fn parse_chain_inner(&mut self) -> ParseResult<Node> {
        let mut node = self.parse_primary()?;
        let mut links = 0usize;
        while self.check_punct('.') {
            links += 1;
            if links > self.options.max_chain_length {
                return Err(ParseError::chain_too_long(
                    self.current_span(),
                    self.options.max_chain_length,
                    self.current_kind(),
                )
                .into());
            }
            self.advance();
            let call = self.parse_call(Some(Box::new(node)))?;
            node = Node::MethodCall(call);
        }
        Ok(node)
    }
}
