//! Token cursor for navigating the token stream.
//!
//! Comment tokens (present when the caller lexed with
//! `tokenize_with_comments`) are skipped transparently: the cursor never
//! rests on one.

use tracing::trace;
use weft_ir::{Keyword, Span, Token, TokenKind, TokenList};

/// Returned past the end of a list that lacks its own `Eof`.
static EOF: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        let mut cursor = Cursor { tokens, pos: 0 };
        cursor.skip_comments();
        cursor
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// The current token. Past the end this is `Eof`.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the last consumed token.
    pub fn previous_span(&self) -> Span {
        self.tokens.as_slice()[..self.pos.min(self.tokens.len())]
            .iter()
            .rev()
            .find(|t| !matches!(t.kind, TokenKind::Comment(_)))
            .map_or(Span::DUMMY, |t| t.span)
    }

    /// Kind of the token after the current one, skipping comments.
    pub fn peek_kind(&self) -> &'a TokenKind {
        self.tokens.as_slice()[self.pos.min(self.tokens.len())..]
            .iter()
            .skip(1)
            .find(|t| !matches!(t.kind, TokenKind::Comment(_)))
            .map_or(&EOF.kind, |t| &t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    #[inline]
    pub fn check_punct(&self, c: char) -> bool {
        self.current_kind().is_punct(c)
    }

    #[inline]
    pub fn check_keyword(&self, kw: Keyword) -> bool {
        self.current_kind().is_keyword(kw)
    }

    /// Consume the current token. Never moves past `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            trace!(pos = self.pos, kind = ?token.kind, "advance");
            self.pos += 1;
            self.skip_comments();
        }
        token
    }

    /// Skip statement separators (`;`).
    pub fn skip_separators(&mut self) {
        while self.check_punct(';') {
            self.advance();
        }
    }

    fn skip_comments(&mut self) {
        while matches!(self.current_kind(), TokenKind::Comment(_)) {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
