//! One error type across all phases.

use weft_diagnostic::{Diagnostic, ErrorCode};
use weft_eval::ExecutionError;
use weft_ir::Span;
use weft_lexer::LexError;
use weft_parse::{ParseError, ParseFailure};
use weft_policy::SecurityError;

/// Why an input was rejected. Only the first error is ever reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Security(#[from] SecurityError),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

impl From<ParseFailure> for Error {
    fn from(failure: ParseFailure) -> Self {
        match failure {
            ParseFailure::Syntax(err) => Error::Parse(err),
            ParseFailure::Security(err) => Error::Security(err),
        }
    }
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Lex(err) => err.code(),
            Error::Parse(err) => err.code(),
            Error::Security(err) => err.code(),
            Error::Execution(err) => err.code(),
        }
    }

    /// Source location, when the phase knows one.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(err) => Some(err.span),
            Error::Parse(err) => Some(err.span),
            Error::Security(err) => Some(err.span),
            Error::Execution(err) => err.span,
        }
    }

    pub fn is_security(&self) -> bool {
        matches!(self, Error::Security(_))
    }

    /// Phase name for summaries: `lex`, `parse`, `security` or `execution`.
    pub fn phase(&self) -> &'static str {
        match self {
            Error::Lex(_) => "lex",
            Error::Parse(_) => "parse",
            Error::Security(_) => "security",
            Error::Execution(_) => "execution",
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Lex(err) => err.to_diagnostic(),
            Error::Parse(err) => err.to_diagnostic(),
            Error::Security(err) => err.to_diagnostic(),
            Error::Execution(err) => err.to_diagnostic(),
        }
    }
}
