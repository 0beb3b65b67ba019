//! Execution errors.
//!
//! `ExecutionErrorKind` carries structured data for each failure so callers
//! can match on it. The free functions below are the way to build one;
//! capability contexts use them from inside operations and modifiers.
//! Spans are attached by the executor, which knows which call failed.

use weft_diagnostic::{Diagnostic, ErrorCode};
use weft_ir::Span;

use crate::Value;

/// Result of executing a node or invoking a capability.
pub type EvalResult<T = Value> = Result<T, ExecutionError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionErrorKind {
    #[error("unknown operation `{name}`")]
    UnknownOperation { name: String },

    #[error("`{method}` cannot be called on {receiver}")]
    NoSuchMethod { method: String, receiver: String },

    #[error("`{method}` takes {expected} argument(s) but {got} were supplied")]
    WrongArgCount {
        method: String,
        expected: usize,
        got: usize,
    },

    #[error("`{method}` expects {expected} for `{arg}`, found {found}")]
    WrongArgType {
        method: String,
        arg: String,
        expected: String,
        found: String,
    },

    #[error("`{method}` requires argument `{arg}`")]
    MissingArgument { method: String, arg: String },

    #[error("`{method}` does not accept argument `{arg}`")]
    UnexpectedArgument { method: String, arg: String },

    #[error("`{method}` does not take a block")]
    BlockNotAccepted { method: String },

    #[error("invalid value for `{arg}` in `{method}`: {reason}")]
    InvalidValue {
        method: String,
        arg: String,
        reason: String,
    },
}

/// An execution failure, optionally located and scoped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ExecutionError {
    pub kind: ExecutionErrorKind,
    /// Span of the innermost call that failed.
    pub span: Option<Span>,
    /// Enclosing block path, e.g. `vstack > card`.
    pub scope: Option<String>,
}

impl ExecutionError {
    #[cold]
    pub fn new(kind: ExecutionErrorKind) -> Self {
        ExecutionError {
            kind,
            span: None,
            scope: None,
        }
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    /// Record the innermost enclosing block path.
    #[must_use]
    pub fn within(mut self, scope: impl Into<String>) -> Self {
        if self.scope.is_none() {
            self.scope = Some(scope.into());
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ExecutionErrorKind::UnknownOperation { .. } => ErrorCode::E3001,
            ExecutionErrorKind::NoSuchMethod { .. } => ErrorCode::E3002,
            ExecutionErrorKind::WrongArgCount { .. } => ErrorCode::E3003,
            ExecutionErrorKind::WrongArgType { .. } => ErrorCode::E3004,
            ExecutionErrorKind::MissingArgument { .. } => ErrorCode::E3005,
            ExecutionErrorKind::UnexpectedArgument { .. } => ErrorCode::E3006,
            ExecutionErrorKind::BlockNotAccepted { .. } => ErrorCode::E3007,
            ExecutionErrorKind::InvalidValue { .. } => ErrorCode::E3008,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.to_string());
        if let Some(span) = self.span {
            diag = diag.with_label(span, self.label());
        }
        if let Some(scope) = &self.scope {
            diag = diag.with_note(format!("inside `{scope}`"));
        }
        match &self.kind {
            ExecutionErrorKind::UnknownOperation { .. } => {
                diag.with_help("only operations offered by the host context can be called")
            }
            ExecutionErrorKind::NoSuchMethod { receiver, .. } if receiver == "a node" => {
                diag.with_help("this name is an operation; call it on its own line")
            }
            _ => diag,
        }
    }

    fn label(&self) -> &'static str {
        match self.kind {
            ExecutionErrorKind::UnknownOperation { .. } => "not offered by this context",
            ExecutionErrorKind::NoSuchMethod { .. } => "method not found",
            ExecutionErrorKind::WrongArgCount { .. } => "wrong number of arguments",
            ExecutionErrorKind::WrongArgType { .. } => "wrong argument type",
            ExecutionErrorKind::MissingArgument { .. } => "missing argument",
            ExecutionErrorKind::UnexpectedArgument { .. } => "unexpected argument",
            ExecutionErrorKind::BlockNotAccepted { .. } => "block not allowed here",
            ExecutionErrorKind::InvalidValue { .. } => "value rejected",
        }
    }
}

// Constructors

/// Name not offered as an operation (or modifier) by the context.
#[cold]
pub fn unknown_operation(name: &str) -> ExecutionError {
    ExecutionError::new(ExecutionErrorKind::UnknownOperation {
        name: name.to_owned(),
    })
}

/// Method exists but cannot be called on this receiver.
///
/// `receiver` reads as a noun phrase: `a node`, `a string`, `the top level`.
#[cold]
pub fn no_such_method(method: &str, receiver: &str) -> ExecutionError {
    ExecutionError::new(ExecutionErrorKind::NoSuchMethod {
        method: method.to_owned(),
        receiver: receiver.to_owned(),
    })
}

#[cold]
pub fn wrong_arg_count(method: &str, expected: usize, got: usize) -> ExecutionError {
    ExecutionError::new(ExecutionErrorKind::WrongArgCount {
        method: method.to_owned(),
        expected,
        got,
    })
}

#[cold]
pub fn wrong_arg_type(method: &str, arg: &str, expected: &str, found: &Value) -> ExecutionError {
    ExecutionError::new(ExecutionErrorKind::WrongArgType {
        method: method.to_owned(),
        arg: arg.to_owned(),
        expected: expected.to_owned(),
        found: found.type_name().to_owned(),
    })
}

#[cold]
pub fn missing_argument(method: &str, arg: &str) -> ExecutionError {
    ExecutionError::new(ExecutionErrorKind::MissingArgument {
        method: method.to_owned(),
        arg: arg.to_owned(),
    })
}

#[cold]
pub fn unexpected_argument(method: &str, arg: &str) -> ExecutionError {
    ExecutionError::new(ExecutionErrorKind::UnexpectedArgument {
        method: method.to_owned(),
        arg: arg.to_owned(),
    })
}

#[cold]
pub fn block_not_accepted(method: &str) -> ExecutionError {
    ExecutionError::new(ExecutionErrorKind::BlockNotAccepted {
        method: method.to_owned(),
    })
}

#[cold]
pub fn invalid_value(method: &str, arg: &str, reason: impl Into<String>) -> ExecutionError {
    ExecutionError::new(ExecutionErrorKind::InvalidValue {
        method: method.to_owned(),
        arg: arg.to_owned(),
        reason: reason.into(),
    })
}
