//! Security rejections.
//!
//! Kept apart from parse errors so callers can alert on attempted sandbox
//! escapes separately from ordinary typos.

use std::fmt;

use weft_diagnostic::{Diagnostic, ErrorCode};
use weft_ir::Span;

/// Why a name, character or literal was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SecurityViolation {
    /// Name is on the denylist.
    DeniedMethod,
    /// Uppercase-initial identifier (host constant lookup).
    ConstantReference,
    /// `__name` style method.
    DunderMethod,
    /// Name contains shell metacharacters, path sequences or is malformed.
    SuspiciousIdentifier,
    /// Punctuation with no meaning in the grammar and a meaning in shells.
    SuspiciousPunctuation,
    /// String literal carrying an injection pattern (strict mode).
    SuspiciousLiteral,
    /// Name is not offered by the capability context.
    NotAllowlisted,
}

impl SecurityViolation {
    pub fn code(self) -> ErrorCode {
        match self {
            SecurityViolation::DeniedMethod => ErrorCode::E2001,
            SecurityViolation::ConstantReference => ErrorCode::E2002,
            SecurityViolation::DunderMethod => ErrorCode::E2003,
            SecurityViolation::SuspiciousIdentifier => ErrorCode::E2004,
            SecurityViolation::SuspiciousPunctuation => ErrorCode::E2005,
            SecurityViolation::SuspiciousLiteral => ErrorCode::E2006,
            SecurityViolation::NotAllowlisted => ErrorCode::E2007,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            SecurityViolation::DeniedMethod => "method is not allowed",
            SecurityViolation::ConstantReference => "constant references are not allowed",
            SecurityViolation::DunderMethod => "dunder methods are not allowed",
            SecurityViolation::SuspiciousIdentifier => "suspicious identifier",
            SecurityViolation::SuspiciousPunctuation => "suspicious character",
            SecurityViolation::SuspiciousLiteral => "suspicious string literal",
            SecurityViolation::NotAllowlisted => "method is not available",
        }
    }
}

impl fmt::Display for SecurityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A rejected method name, character or literal.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{violation}: `{name}`")]
pub struct SecurityError {
    pub span: Span,
    /// The offending text (method name, character or literal).
    pub name: String,
    pub violation: SecurityViolation,
}

impl SecurityError {
    #[cold]
    pub fn new(span: Span, name: impl Into<String>, violation: SecurityViolation) -> Self {
        SecurityError {
            span,
            name: name.into(),
            violation,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.violation.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, self.violation.describe());
        match self.violation {
            SecurityViolation::ConstantReference => {
                diag.with_note("only lowercase operation names can be called")
            }
            SecurityViolation::NotAllowlisted => {
                diag.with_help("run `weft deny <name>` to see how a name is classified")
            }
            SecurityViolation::SuspiciousLiteral => {
                diag.with_note("strict mode rejects literals with shell or path patterns")
            }
            _ => diag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offender() {
        let err = SecurityError::new(Span::new(0, 6), "system", SecurityViolation::DeniedMethod);
        assert_eq!(err.to_string(), "method is not allowed: `system`");
    }

    #[test]
    fn every_violation_is_a_security_code() {
        for violation in [
            SecurityViolation::DeniedMethod,
            SecurityViolation::ConstantReference,
            SecurityViolation::DunderMethod,
            SecurityViolation::SuspiciousIdentifier,
            SecurityViolation::SuspiciousPunctuation,
            SecurityViolation::SuspiciousLiteral,
            SecurityViolation::NotAllowlisted,
        ] {
            assert!(violation.code().is_security_error(), "{violation:?}");
        }
    }

    #[test]
    fn diagnostic_labels_offender() {
        let err = SecurityError::new(Span::new(4, 10), "Kernel", SecurityViolation::ConstantReference);
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E2002);
        assert_eq!(diag.primary_span(), Some(Span::new(4, 10)));
        assert_eq!(diag.notes.len(), 1);
    }
}
