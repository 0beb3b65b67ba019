//! The parse-execute pipeline.

use std::borrow::Cow;

use weft_eval::{CapabilityContext, RenderNode, Value};
use weft_ir::{Node, TokenList};
use weft_policy::SecurityPolicy;

use crate::{Error, InterpreterConfig};

/// Runs untrusted source against a capability context.
///
/// Holds configuration only; every call is an independent
/// tokenize → parse → execute cycle, so one interpreter can be shared
/// across threads.
///
/// ```
/// use weftc::Interpreter;
/// use weft_ui::StandardContext;
///
/// let node = Interpreter::default()
///     .render("text(\"Hello World\")", &StandardContext)
///     .unwrap();
/// assert_eq!(node.tag, "span");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    config: InterpreterConfig,
    /// Fixed allowlist; `None` derives one from each context.
    allowlist: Option<SecurityPolicy>,
}

impl Interpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Interpreter {
            config,
            allowlist: None,
        }
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::default()
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn tokenize(&self, source: &str) -> Result<TokenList, Error> {
        Ok(weft_lexer::tokenize(source)?)
    }

    /// Parse without a context.
    ///
    /// Uses the fixed allowlist if one was configured, the denylist alone
    /// otherwise.
    pub fn parse_source(&self, source: &str) -> Result<Node, Error> {
        let policy = match (&self.allowlist, self.config.denylist_only) {
            (Some(policy), false) => Cow::Borrowed(policy),
            _ => Cow::Owned(SecurityPolicy::denylist_only()),
        };
        self.parse_with(source, &policy)
    }

    /// Tokenize, parse and execute `source` against `ctx`.
    ///
    /// Nothing is executed unless the whole input parses and passes the
    /// security policy.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn interpret<C: CapabilityContext>(&self, source: &str, ctx: &C) -> Result<Value, Error> {
        let policy = self.policy_for(ctx);
        let ast = self.parse_with(source, &policy)?;
        tracing::debug!(calls = ast.method_names().len(), "parsed");
        Ok(weft_eval::execute(&ast, ctx)?)
    }

    /// [`Interpreter::interpret`], collapsed into a single node.
    pub fn render<C: CapabilityContext>(&self, source: &str, ctx: &C) -> Result<RenderNode, Error> {
        self.interpret(source, ctx).map(Value::into_render_node)
    }

    /// The policy a call against `ctx` is parsed under.
    pub fn policy_for<C: CapabilityContext>(&self, ctx: &C) -> Cow<'_, SecurityPolicy> {
        if self.config.denylist_only {
            return Cow::Owned(SecurityPolicy::denylist_only());
        }
        match &self.allowlist {
            Some(policy) => Cow::Borrowed(policy),
            None => Cow::Owned(SecurityPolicy::with_allowlist(
                ctx.capabilities().names(),
            )),
        }
    }

    fn parse_with(&self, source: &str, policy: &SecurityPolicy) -> Result<Node, Error> {
        let tokens = self.tokenize(source)?;
        Ok(weft_parse::parse(&tokens, policy, &self.config.parse_options())?)
    }
}

/// Builder for [`Interpreter`].
#[derive(Clone, Debug, Default)]
pub struct InterpreterBuilder {
    config: InterpreterConfig,
    allowlist: Option<Vec<String>>,
}

impl InterpreterBuilder {
    /// Start from `config` instead of the defaults.
    #[must_use]
    pub fn config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn max_chain_length(mut self, max_chain_length: usize) -> Self {
        self.config.max_chain_length = max_chain_length;
        self
    }

    #[must_use]
    pub fn strict_literals(mut self, strict: bool) -> Self {
        self.config.strict_literals = strict;
        self
    }

    #[must_use]
    pub fn denylist_only(mut self, denylist_only: bool) -> Self {
        self.config.denylist_only = denylist_only;
        self
    }

    /// Restrict callable names to `names` for every context.
    #[must_use]
    pub fn allowlist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowlist = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            config: self.config,
            allowlist: self.allowlist.map(SecurityPolicy::with_allowlist),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use weft_ui::StandardContext;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn interpreter_is_shareable() {
        assert_send_sync::<Interpreter>();
    }

    #[test]
    fn builder_sets_config() {
        let interp = Interpreter::builder()
            .max_depth(4)
            .max_chain_length(2)
            .strict_literals(true)
            .build();
        assert_eq!(interp.config().max_depth, 4);
        assert_eq!(interp.config().max_chain_length, 2);
        assert!(interp.config().strict_literals);
        assert!(!interp.config().denylist_only);
    }

    #[test]
    fn context_names_become_allowlist() {
        let interp = Interpreter::default();
        let policy = interp.policy_for(&StandardContext);
        assert!(policy.has_allowlist());
        assert!(policy.is_method_allowed("vstack"));
        assert!(!policy.is_method_allowed("reader"));
    }

    #[test]
    fn denylist_only_mode() {
        let interp = Interpreter::builder().denylist_only(true).build();
        let policy = interp.policy_for(&StandardContext);
        assert!(!policy.has_allowlist());
        assert!(policy.is_method_allowed("reader"));
        assert!(!policy.is_method_allowed("eval"));
    }

    #[test]
    fn fixed_allowlist_wins_over_context() {
        let interp = Interpreter::builder().allowlist(["text"]).build();
        assert!(interp.render("text(\"a\")", &StandardContext).is_ok());
        let err = interp.render("divider", &StandardContext).unwrap_err();
        assert!(err.is_security());
    }

    #[test]
    fn parse_source_without_context() {
        let interp = Interpreter::default();
        let ast = interp.parse_source("anything(1).goes").unwrap();
        assert_eq!(ast.method_names(), vec!["anything", "goes"]);
        assert!(interp.parse_source("system(\"ls\")").unwrap_err().is_security());
    }
}
