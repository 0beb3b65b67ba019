use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit is the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Security policy rejections
/// - E3xxx: Execution errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unterminated `=begin` block comment
    E0002,
    /// Invalid `\u{...}` escape
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Nesting depth limit exceeded
    E1005,
    /// Method chain length limit exceeded
    E1006,
    /// Duplicate named argument
    E1007,
    /// Positional argument after named argument
    E1008,
    /// Empty input
    E1009,

    // Security Errors (E2xxx)
    /// Method name on the denylist
    E2001,
    /// Constant reference (uppercase identifier)
    E2002,
    /// Dunder method name
    E2003,
    /// Identifier containing shell metacharacters
    E2004,
    /// Suspicious punctuation in source
    E2005,
    /// Suspicious string literal (strict mode)
    E2006,
    /// Method not offered by the capability context
    E2007,

    // Execution Errors (E3xxx)
    /// Unknown operation
    E3001,
    /// No such method on receiver
    E3002,
    /// Wrong number of arguments
    E3003,
    /// Wrong argument type
    E3004,
    /// Missing required argument
    E3005,
    /// Unexpected argument
    E3006,
    /// Block passed to an operation that takes none
    E3007,
    /// Argument value rejected by the operation
    E3008,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            ErrorCode::E3007 => "E3007",
            ErrorCode::E3008 => "E3008",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Attempted sandbox escapes; callers alert on these separately.
    pub fn is_security_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    pub fn is_execution_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_predicates() {
        assert!(ErrorCode::E0001.is_lexer_error());
        assert!(ErrorCode::E1005.is_parser_error());
        assert!(ErrorCode::E2001.is_security_error());
        assert!(!ErrorCode::E2001.is_parser_error());
        assert!(ErrorCode::E3004.is_execution_error());
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ErrorCode::E2007.to_string(), "E2007");
    }
}
