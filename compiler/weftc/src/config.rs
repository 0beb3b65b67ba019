//! Interpreter configuration.
//!
//! Defaults, then `WEFT_*` environment variables, then explicit settings
//! (builder calls or CLI flags), each layer overriding the last.

use weft_parse::ParseOptions;

/// Environment variable overriding [`InterpreterConfig::max_depth`].
pub const ENV_MAX_DEPTH: &str = "WEFT_MAX_DEPTH";
/// Environment variable overriding [`InterpreterConfig::max_chain_length`].
pub const ENV_MAX_CHAIN: &str = "WEFT_MAX_CHAIN";
/// Environment variable enabling [`InterpreterConfig::strict_literals`].
pub const ENV_STRICT: &str = "WEFT_STRICT";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got `{value}`")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be one of 1/0/true/false/yes/no/on/off, got `{value}`")]
    InvalidFlag { var: &'static str, value: String },
}

/// Limits and policy switches for one interpreter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Maximum nesting of argument lists, blocks and parentheses.
    pub max_depth: usize,
    /// Maximum number of `.call` links in one chain.
    pub max_chain_length: usize,
    /// Reject string literals carrying shell or path patterns.
    pub strict_literals: bool,
    /// Check method names against the denylist only, without restricting
    /// them to the context's capability names.
    pub denylist_only: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            max_depth: ParseOptions::DEFAULT_MAX_DEPTH,
            max_chain_length: ParseOptions::DEFAULT_MAX_CHAIN_LENGTH,
            strict_literals: false,
            denylist_only: false,
        }
    }
}

impl InterpreterConfig {
    /// Defaults overridden by `WEFT_MAX_DEPTH`, `WEFT_MAX_CHAIN`, `WEFT_STRICT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from `lookup` (an environment stand-in).
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = lookup(ENV_MAX_DEPTH) {
            self.max_depth = parse_limit(ENV_MAX_DEPTH, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_CHAIN) {
            self.max_chain_length = parse_limit(ENV_MAX_CHAIN, &value)?;
        }
        if let Some(value) = lookup(ENV_STRICT) {
            self.strict_literals = parse_flag(ENV_STRICT, &value)?;
        }
        Ok(self)
    }

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

    #[must_use]
    pub fn with_denylist_only(mut self, denylist_only: bool) -> Self {
        self.denylist_only = denylist_only;
        self
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_max_depth(self.max_depth)
            .with_max_chain_length(self.max_chain_length)
            .with_strict_literals(self.strict_literals)
    }
}

pub(crate) fn parse_limit(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: value.to_owned(),
        }),
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
