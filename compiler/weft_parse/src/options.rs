//! Parser limits and switches.

/// Limits applied while parsing.
///
/// Nesting counts argument lists, blocks and parenthesised expressions on
/// the current path; chain length counts `.call` links after the first
/// expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub max_depth: usize,
    pub max_chain_length: usize,
    /// Run the strict literal check on every string literal.
    pub strict_literals: bool,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 64;
    pub const DEFAULT_MAX_CHAIN_LENGTH: usize = 128;

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_max_chain_length(mut self, max_chain_length: usize) -> Self {
        self.max_chain_length = max_chain_length;
        self
    }

    #[must_use]
    pub fn with_strict_literals(mut self, strict: bool) -> Self {
        self.strict_literals = strict;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_chain_length: Self::DEFAULT_MAX_CHAIN_LENGTH,
            strict_literals: false,
        }
    }
}
