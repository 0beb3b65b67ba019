//! Diagnostic system for the Weft interpreter.
//!
//! Every phase error (lex, parse, security, execution) converts into a
//! [`Diagnostic`]: an error code for searchability, a message, labelled
//! spans and notes. The interpreter returns typed errors; only callers that
//! want human-readable output go through this crate.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use span_utils::LineOffsetTable;
