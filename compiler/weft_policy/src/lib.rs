//! Weft security policy.
//!
//! A pure predicate layer: given a method name, a punctuation character or
//! a string literal, decide whether it may appear in a program. The parser
//! consults it while building call nodes, so no AST containing a rejected
//! name is ever constructed.
//!
//! Checks are exact lookups and byte scans. Nothing here uses regular
//! expressions or substring matching against the denylist.

mod denylist;
mod security_error;

pub use denylist::{denylist, is_denylisted};
pub use security_error::{SecurityError, SecurityViolation};

use rustc_hash::FxHashSet;
use weft_ir::Span;

/// Allow/deny decisions for method names and source text.
///
/// Without an allowlist only the denylist and the structural checks apply.
/// With one, a name must also be in it; the interpreter installs the
/// capability context's operation and modifier names.
#[derive(Clone, Debug, Default)]
pub struct SecurityPolicy {
    allowlist: Option<FxHashSet<String>>,
}

impl SecurityPolicy {
    /// Denylist and structural checks only.
    pub fn denylist_only() -> Self {
        SecurityPolicy { allowlist: None }
    }

    /// Denylist, structural checks, and membership in `names`.
    pub fn with_allowlist<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SecurityPolicy {
            allowlist: Some(names.into_iter().map(Into::into).collect()),
        }
    }

    pub fn has_allowlist(&self) -> bool {
        self.allowlist.is_some()
    }

    /// Whether `name` may be called.
    pub fn is_method_allowed(&self, name: &str) -> bool {
        self.classify_method(name).is_none()
    }

    /// The first violation `name` commits, if any.
    ///
    /// Order: malformed or suspicious, constant, dunder, denylist,
    /// allowlist.
    pub fn classify_method(&self, name: &str) -> Option<SecurityViolation> {
        if Self::is_identifier_suspicious(name) || !is_identifier_shaped(name) {
            return Some(SecurityViolation::SuspiciousIdentifier);
        }
        if name.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Some(SecurityViolation::ConstantReference);
        }
        if name.starts_with("__") {
            return Some(SecurityViolation::DunderMethod);
        }
        if is_denylisted(name) {
            return Some(SecurityViolation::DeniedMethod);
        }
        match &self.allowlist {
            Some(allowed) if !allowed.contains(name) => Some(SecurityViolation::NotAllowlisted),
            _ => None,
        }
    }

    /// Reject `name` unless it may be called.
    pub fn check_method(&self, name: &str, span: Span) -> Result<(), SecurityError> {
        match self.classify_method(name) {
            None => Ok(()),
            Some(violation) => Err(SecurityError::new(span, name, violation)),
        }
    }

    /// Shell metacharacters, control characters or path sequences.
    pub fn is_identifier_suspicious(text: &str) -> bool {
        text.contains("..")
            || text.bytes().any(|b| {
                matches!(
                    b,
                    b';' | b'`' | b'$' | b'|' | b'&' | b'>' | b'<' | b'/' | b'\n' | b'\0'
                )
            })
    }

    /// Characters with no role in the grammar that shells give meaning to.
    pub fn is_punctuation_suspicious(c: char) -> bool {
        matches!(c, '`' | '$' | '|' | '&' | '>' | '<' | '!' | '%')
    }

    pub fn check_punctuation(c: char, span: Span) -> Result<(), SecurityError> {
        if Self::is_punctuation_suspicious(c) {
            return Err(SecurityError::new(
                span,
                c.to_string(),
                SecurityViolation::SuspiciousPunctuation,
            ));
        }
        Ok(())
    }

    /// Command substitution, interpolation, NUL bytes, parent-directory
    /// paths or script tags inside a string literal.
    pub fn is_literal_suspicious(text: &str) -> bool {
        const PATTERNS: &[&str] = &["`", "$(", "#{", "\0", "../", "..\\"];
        PATTERNS.iter().any(|p| text.contains(p)) || contains_ignore_ascii_case(text, "<script")
    }

    /// Strict-mode literal check.
    pub fn check_literal(text: &str, span: Span) -> Result<(), SecurityError> {
        if Self::is_literal_suspicious(text) {
            return Err(SecurityError::new(
                span,
                text,
                SecurityViolation::SuspiciousLiteral,
            ));
        }
        Ok(())
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier_shaped(name: &str) -> bool {
    let mut bytes = name.bytes();
    matches!(bytes.next(), Some(b) if b.is_ascii_alphabetic() || b == b'_')
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}
