//! Single-pass scanner producing the token list.
//!
//! One `match` on the current byte per token, no backtracking: every byte
//! is examined a bounded number of times.

use crate::cursor::{is_ident_continue, is_ident_start, Cursor};
use crate::escape::{unescape_double, unescape_single};
use crate::lex_error::LexError;
use weft_ir::{Keyword, Number, Span, Token, TokenKind, TokenList};

pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
    keep_comments: bool,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str, keep_comments: bool) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            keep_comments,
        }
    }

    /// Scan to the end. The list always ends with exactly one `Eof`.
    pub(crate) fn run(mut self) -> Result<TokenList, LexError> {
        let mut tokens = TokenList::with_capacity(self.cursor.source_len() / 4 + 1);
        loop {
            let token = self.next_token()?;
            match token.kind {
                TokenKind::Eof => {
                    tokens.push(token);
                    return Ok(tokens);
                }
                TokenKind::Comment(_) if !self.keep_comments => {}
                _ => tokens.push(token),
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        let start = self.cursor.pos();
        let kind = match self.cursor.current() {
            0 if self.cursor.is_eof() => TokenKind::Eof,
            b'#' => self.line_comment(start),
            b'=' if self.cursor.at_line_start() && self.at_marker("=begin") => {
                self.block_comment(start)?
            }
            b'"' => self.double_string(start)?,
            b'\'' => self.single_string(start)?,
            b':' if is_ident_start(self.cursor.peek()) => self.symbol(),
            b'-' if self.cursor.peek().is_ascii_digit() => self.number(start),
            b'0'..=b'9' => self.number(start),
            b if is_ident_start(b) => self.identifier(start),
            _ => {
                let c = self.cursor.current_char().unwrap_or('\u{FFFD}');
                self.cursor.advance_char();
                TokenKind::Punctuation(c)
            }
        };
        Ok(Token::new(kind, self.span_from(start)))
    }

    fn skip_whitespace(&mut self) {
        self.cursor
            .eat_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c));
    }

    /// `marker` at the cursor, followed by whitespace or EOF.
    fn at_marker(&self, marker: &str) -> bool {
        self.cursor.starts_with(marker)
            && matches!(
                self.cursor.peek_at(marker.len()),
                0 | b' ' | b'\t' | b'\r' | b'\n'
            )
    }

    fn line_comment(&mut self, start: usize) -> TokenKind {
        self.cursor.advance();
        self.cursor.eat_until_newline();
        TokenKind::Comment(self.cursor.slice_from(start + 1).to_owned())
    }

    /// `=begin` ... `=end`, both markers at the start of a line.
    fn block_comment(&mut self, start: usize) -> Result<TokenKind, LexError> {
        self.cursor.eat_until_newline();
        let body_start = self.cursor.pos();
        loop {
            if self.cursor.is_eof() {
                return Err(LexError::unterminated_block_comment(self.span_from(start)));
            }
            // newline
            self.cursor.advance();
            if self.at_marker("=end") {
                let body_end = self.cursor.pos();
                self.cursor.eat_until_newline();
                let body = self.cursor.slice(body_start, body_end);
                return Ok(TokenKind::Comment(body.trim_matches('\n').to_owned()));
            }
            self.cursor.eat_until_newline();
        }
    }

    /// Find the closing `quote`, skipping escaped characters. The cursor
    /// ends just past the closing quote; returns the body's byte range.
    fn scan_quoted(&mut self, start: usize, quote: u8) -> Result<(usize, usize), LexError> {
        self.cursor.advance();
        let body_start = self.cursor.pos();
        loop {
            match self.cursor.current() {
                0 if self.cursor.is_eof() => {
                    return Err(LexError::unterminated_string(self.span_from(start)));
                }
                b'\\' => {
                    self.cursor.advance();
                    self.cursor.advance();
                }
                b if b == quote => {
                    let body_end = self.cursor.pos();
                    self.cursor.advance();
                    return Ok((body_start, body_end));
                }
                _ => self.cursor.advance(),
            }
        }
    }

    fn double_string(&mut self, start: usize) -> Result<TokenKind, LexError> {
        let (body_start, body_end) = self.scan_quoted(start, b'"')?;
        let body = self.cursor.slice(body_start, body_end);
        let value = unescape_double(body, to_u32(body_start))?;
        Ok(TokenKind::StringLiteral(value))
    }

    fn single_string(&mut self, start: usize) -> Result<TokenKind, LexError> {
        let (body_start, body_end) = self.scan_quoted(start, b'\'')?;
        let body = self.cursor.slice(body_start, body_end);
        Ok(TokenKind::StringLiteral(unescape_single(body)))
    }

    fn symbol(&mut self) -> TokenKind {
        self.cursor.advance();
        let name_start = self.cursor.pos();
        self.cursor.eat_while(is_ident_continue);
        TokenKind::SymbolLiteral(self.cursor.slice_from(name_start).to_owned())
    }

    fn identifier(&mut self, start: usize) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);
        match self.cursor.slice_from(start) {
            "true" => TokenKind::BooleanLiteral(true),
            "false" => TokenKind::BooleanLiteral(false),
            "nil" => TokenKind::NilLiteral,
            text => Keyword::from_ident(text)
                .map_or_else(|| TokenKind::Identifier(text.to_owned()), TokenKind::Keyword),
        }
    }

    /// Digits with `_` separators, an optional fraction and exponent.
    /// A `.` only starts a fraction when a digit follows, so `1.foo` is a
    /// chain on the integer.
    fn number(&mut self, start: usize) -> TokenKind {
        if self.cursor.current() == b'-' {
            self.cursor.advance();
        }
        self.eat_digits();

        let mut is_float = false;
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            is_float = true;
            self.cursor.advance();
            self.eat_digits();
        }
        if matches!(self.cursor.current(), b'e' | b'E') {
            let signed = matches!(self.cursor.peek(), b'+' | b'-');
            let digit_at = if signed { 2 } else { 1 };
            if self.cursor.peek_at(digit_at).is_ascii_digit() {
                is_float = true;
                self.cursor.advance();
                if signed {
                    self.cursor.advance();
                }
                self.eat_digits();
            }
        }

        let text: String = self
            .cursor
            .slice_from(start)
            .chars()
            .filter(|&c| c != '_')
            .collect();
        let number = if is_float {
            Number::Float(parse_float(&text))
        } else {
            text.parse::<i64>()
                .map_or_else(|_| Number::Float(parse_float(&text)), Number::Int)
        };
        TokenKind::NumberLiteral(number)
    }

    /// Digits, with single `_` separators between them.
    fn eat_digits(&mut self) {
        loop {
            match self.cursor.current() {
                b'0'..=b'9' => self.cursor.advance(),
                b'_' if self.cursor.peek().is_ascii_digit() => self.cursor.advance(),
                _ => return,
            }
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(to_u32(start), to_u32(self.cursor.pos()))
    }
}

/// Scanned number text is always valid float syntax.
fn parse_float(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(f64::NAN)
}

#[inline]
fn to_u32(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}
