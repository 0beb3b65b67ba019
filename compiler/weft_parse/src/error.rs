//! Parse errors.
//!
//! Syntax errors only. Security rejections are a separate type
//! ([`weft_policy::SecurityError`]) and travel in their own
//! [`ParseFailure`] variant, so callers can always tell "malformed" from
//! "forbidden".

use std::fmt;

use weft_diagnostic::{Diagnostic, ErrorCode};
use weft_ir::{Span, TokenKind};
use weft_policy::SecurityError;

/// A grammar violation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
    /// What the parser was looking for, when there is a single answer.
    pub expected: Option<String>,
    /// Description of the token actually found.
    pub found: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("missing expression")]
    ExpectedExpression,
    /// `(`, `do` or `{` never closed; `open` is where it started.
    #[error("unclosed delimiter")]
    UnclosedDelimiter { open: Span },
    #[error("missing method name")]
    ExpectedIdentifier,
    #[error("nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
    #[error("method chain exceeds the limit of {limit} calls")]
    ChainTooLong { limit: usize },
    #[error("duplicate named argument `{key}`")]
    DuplicateNamedArgument { key: String },
    #[error("positional argument after named arguments")]
    PositionalAfterNamed,
    #[error("empty input")]
    EmptyInput,
}

impl ParseError {
    fn new(span: Span, kind: ParseErrorKind, expected: Option<String>, found: &TokenKind) -> Self {
        ParseError {
            span,
            kind,
            expected,
            found: found.describe(),
        }
    }

    #[cold]
    pub fn unexpected(span: Span, expected: impl Into<String>, found: &TokenKind) -> Self {
        Self::new(
            span,
            ParseErrorKind::UnexpectedToken,
            Some(expected.into()),
            found,
        )
    }

    #[cold]
    pub fn expected_expression(span: Span, found: &TokenKind) -> Self {
        Self::new(
            span,
            ParseErrorKind::ExpectedExpression,
            Some("an expression".to_owned()),
            found,
        )
    }

    #[cold]
    pub fn unclosed(span: Span, open: Span, expected: impl Into<String>, found: &TokenKind) -> Self {
        Self::new(
            span,
            ParseErrorKind::UnclosedDelimiter { open },
            Some(expected.into()),
            found,
        )
    }

    #[cold]
    pub fn expected_identifier(span: Span, found: &TokenKind) -> Self {
        Self::new(
            span,
            ParseErrorKind::ExpectedIdentifier,
            Some("a method name".to_owned()),
            found,
        )
    }

    #[cold]
    pub fn nesting_too_deep(span: Span, limit: usize, found: &TokenKind) -> Self {
        Self::new(span, ParseErrorKind::NestingTooDeep { limit }, None, found)
    }

    #[cold]
    pub fn chain_too_long(span: Span, limit: usize, found: &TokenKind) -> Self {
        Self::new(span, ParseErrorKind::ChainTooLong { limit }, None, found)
    }

    #[cold]
    pub fn duplicate_named_argument(span: Span, key: &str) -> Self {
        ParseError {
            span,
            kind: ParseErrorKind::DuplicateNamedArgument {
                key: key.to_owned(),
            },
            expected: None,
            found: format!("`{key}:`"),
        }
    }

    #[cold]
    pub fn positional_after_named(span: Span, found: &TokenKind) -> Self {
        Self::new(
            span,
            ParseErrorKind::PositionalAfterNamed,
            Some("a named argument".to_owned()),
            found,
        )
    }

    #[cold]
    pub fn empty_input(span: Span) -> Self {
        Self::new(
            span,
            ParseErrorKind::EmptyInput,
            Some("a statement".to_owned()),
            &TokenKind::Eof,
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression => ErrorCode::E1002,
            ParseErrorKind::UnclosedDelimiter { .. } => ErrorCode::E1003,
            ParseErrorKind::ExpectedIdentifier => ErrorCode::E1004,
            ParseErrorKind::NestingTooDeep { .. } => ErrorCode::E1005,
            ParseErrorKind::ChainTooLong { .. } => ErrorCode::E1006,
            ParseErrorKind::DuplicateNamedArgument { .. } => ErrorCode::E1007,
            ParseErrorKind::PositionalAfterNamed => ErrorCode::E1008,
            ParseErrorKind::EmptyInput => ErrorCode::E1009,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.expected {
            Some(expected) => format!("expected {expected}"),
            None => self.kind.to_string(),
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, label);
        match &self.kind {
            ParseErrorKind::UnclosedDelimiter { open } => {
                diag.with_secondary_label(*open, "opened here")
            }
            ParseErrorKind::NestingTooDeep { .. } | ParseErrorKind::ChainTooLong { .. } => {
                diag.with_help("split the program into smaller pieces or raise the limit")
            }
            ParseErrorKind::DuplicateNamedArgument { .. } => {
                diag.with_note("each named argument may appear once per call")
            }
            _ => diag,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expected {
            Some(expected) => write!(f, "{}: expected {expected}, found {}", self.kind, self.found),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for ParseError {}

/// Why parsing stopped: a syntax error or a security rejection.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseFailure {
    #[error(transparent)]
    Syntax(#[from] ParseError),
    #[error(transparent)]
    Security(#[from] SecurityError),
}

impl ParseFailure {
    pub fn span(&self) -> Span {
        match self {
            ParseFailure::Syntax(err) => err.span,
            ParseFailure::Security(err) => err.span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseFailure::Syntax(err) => err.code(),
            ParseFailure::Security(err) => err.code(),
        }
    }

    pub fn is_security(&self) -> bool {
        matches!(self, ParseFailure::Security(_))
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseFailure::Syntax(err) => err.to_diagnostic(),
            ParseFailure::Security(err) => err.to_diagnostic(),
        }
    }
}
