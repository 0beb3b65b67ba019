//! Lexer errors.
//!
//! The tokenizer fails on exactly three conditions; everything else
//! (including unknown characters) becomes a token for the parser and the
//! security policy to judge.

use weft_diagnostic::{Diagnostic, ErrorCode};
use weft_ir::Span;

/// A tokenizer failure with its source location.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Missing closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// `=begin` without a matching `=end` line.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    /// `\u{...}` with bad hex digits or a value that is not a scalar.
    #[error("invalid unicode escape")]
    InvalidUnicodeEscape,
}

impl LexError {
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub fn unterminated_block_comment(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedBlockComment,
        }
    }

    #[cold]
    pub fn invalid_unicode_escape(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidUnicodeEscape,
        }
    }

    /// Byte offset where the error starts.
    pub fn position(&self) -> u32 {
        self.span.start
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnterminatedBlockComment => ErrorCode::E0002,
            LexErrorKind::InvalidUnicodeEscape => ErrorCode::E0003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        match self.kind {
            LexErrorKind::UnterminatedString => diag
                .with_label(Span::point(self.span.start), "string starts here")
                .with_help("add the closing quote"),
            LexErrorKind::UnterminatedBlockComment => diag
                .with_label(Span::point(self.span.start), "comment starts here")
                .with_help("add a line starting with `=end`"),
            LexErrorKind::InvalidUnicodeEscape => diag
                .with_label(self.span, "not a valid code point")
                .with_note("unicode escapes take 1 to 6 hex digits: `\\u{1F600}`"),
        }
    }
}

#[cfg(test)]
mod tests;
