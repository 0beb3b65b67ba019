//! Evaluated arguments handed to a capability handler.

use weft_ir::{Number, Span};

use crate::errors::{
    block_not_accepted, missing_argument, unexpected_argument, wrong_arg_count, wrong_arg_type,
};
use crate::{EvalResult, RenderNode, Value};

/// One call, with every argument already evaluated.
///
/// Accessors report problems as execution errors naming the method and the
/// argument, so handlers can use `?` throughout.
#[derive(Clone, Debug, PartialEq)]
pub struct Invocation {
    pub method: String,
    pub positional: Vec<Value>,
    /// Source order; keys are unique.
    pub named: Vec<(String, Value)>,
    /// Block contents, if a block was given.
    pub children: Option<Vec<RenderNode>>,
    pub span: Span,
}

fn positional_label(index: usize) -> String {
    format!("argument {}", index + 1)
}

impl Invocation {
    pub fn new(method: impl Into<String>, span: Span) -> Self {
        Invocation {
            method: method.into(),
            positional: Vec::new(),
            named: Vec::new(),
            children: None,
            span,
        }
    }

    #[must_use]
    pub fn with_positional(mut self, value: Value) -> Self {
        self.positional.push(value);
        self
    }

    #[must_use]
    pub fn with_named(mut self, key: impl Into<String>, value: Value) -> Self {
        self.named.push((key.into(), value));
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<RenderNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn positional(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn named(&self, key: &str) -> Option<&Value> {
        self.named.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    // Arity and shape checks

    pub fn expect_positional(&self, count: usize) -> EvalResult<()> {
        if self.positional.len() == count {
            Ok(())
        } else {
            Err(wrong_arg_count(&self.method, count, self.positional.len()))
        }
    }

    pub fn expect_max_positional(&self, max: usize) -> EvalResult<()> {
        if self.positional.len() <= max {
            Ok(())
        } else {
            Err(wrong_arg_count(&self.method, max, self.positional.len()))
        }
    }

    /// Reject any named argument whose key is not in `allowed`.
    pub fn expect_named_only(&self, allowed: &[&str]) -> EvalResult<()> {
        match self.named.iter().find(|(k, _)| !allowed.contains(&k.as_str())) {
            Some((key, _)) => Err(unexpected_argument(&self.method, key)),
            None => Ok(()),
        }
    }

    pub fn reject_block(&self) -> EvalResult<()> {
        if self.children.is_some() {
            Err(block_not_accepted(&self.method))
        } else {
            Ok(())
        }
    }

    /// Block contents, or nothing if no block was given.
    pub fn take_children(&mut self) -> Vec<RenderNode> {
        self.children.take().unwrap_or_default()
    }

    // Positional accessors

    fn required_positional(&self, index: usize) -> EvalResult<&Value> {
        self.positional
            .get(index)
            .ok_or_else(|| missing_argument(&self.method, &positional_label(index)))
    }

    pub fn positional_str(&self, index: usize) -> EvalResult<&str> {
        match self.required_positional(index)? {
            Value::Str(s) => Ok(s),
            other => Err(self.positional_type_error(index, "a string", other)),
        }
    }

    pub fn optional_positional_str(&self, index: usize) -> EvalResult<Option<&str>> {
        match self.positional.get(index) {
            None | Some(Value::Nil) => Ok(None),
            Some(Value::Str(s)) => Ok(Some(s)),
            Some(other) => Err(self.positional_type_error(index, "a string", other)),
        }
    }

    /// Displayable content: a string or a number.
    pub fn positional_text(&self, index: usize) -> EvalResult<String> {
        match self.required_positional(index)? {
            Value::Str(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(self.positional_type_error(index, "a string", other)),
        }
    }

    pub fn positional_number(&self, index: usize) -> EvalResult<Number> {
        match self.required_positional(index)? {
            Value::Number(n) => Ok(*n),
            other => Err(self.positional_type_error(index, "a number", other)),
        }
    }

    pub fn positional_symbol_or_str(&self, index: usize) -> EvalResult<&str> {
        match self.required_positional(index)? {
            Value::Symbol(s) | Value::Str(s) => Ok(s),
            other => Err(self.positional_type_error(index, "a symbol or string", other)),
        }
    }

    /// A design token: symbol, string or integer (`:lg`, `"lg"`, `4`).
    pub fn positional_keyword(&self, index: usize) -> EvalResult<String> {
        let value = self.required_positional(index)?;
        keyword_of(value)
            .ok_or_else(|| self.positional_type_error(index, "a symbol, string or integer", value))
    }

    // Named accessors

    pub fn named_str(&self, key: &str) -> EvalResult<Option<&str>> {
        match self.named(key) {
            None | Some(Value::Nil) => Ok(None),
            Some(Value::Str(s)) => Ok(Some(s)),
            Some(other) => Err(wrong_arg_type(&self.method, key, "a string", other)),
        }
    }

    pub fn required_named_str(&self, key: &str) -> EvalResult<&str> {
        self.named_str(key)?
            .ok_or_else(|| missing_argument(&self.method, key))
    }

    pub fn named_number(&self, key: &str) -> EvalResult<Option<Number>> {
        match self.named(key) {
            None | Some(Value::Nil) => Ok(None),
            Some(Value::Number(n)) => Ok(Some(*n)),
            Some(other) => Err(wrong_arg_type(&self.method, key, "a number", other)),
        }
    }

    pub fn named_symbol_or_str(&self, key: &str) -> EvalResult<Option<&str>> {
        match self.named(key) {
            None | Some(Value::Nil) => Ok(None),
            Some(Value::Symbol(s) | Value::Str(s)) => Ok(Some(s)),
            Some(other) => Err(wrong_arg_type(&self.method, key, "a symbol or string", other)),
        }
    }

    pub fn named_keyword(&self, key: &str) -> EvalResult<Option<String>> {
        match self.named(key) {
            None | Some(Value::Nil) => Ok(None),
            Some(value) => keyword_of(value)
                .map(Some)
                .ok_or_else(|| wrong_arg_type(&self.method, key, "a symbol, string or integer", value)),
        }
    }

    pub fn named_bool(&self, key: &str) -> EvalResult<Option<bool>> {
        match self.named(key) {
            None | Some(Value::Nil) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(wrong_arg_type(&self.method, key, "a boolean", other)),
        }
    }

    #[cold]
    fn positional_type_error(
        &self,
        index: usize,
        expected: &str,
        found: &Value,
    ) -> crate::ExecutionError {
        wrong_arg_type(&self.method, &positional_label(index), expected, found)
    }
}

fn keyword_of(value: &Value) -> Option<String> {
    match value {
        Value::Symbol(s) | Value::Str(s) => Some(s.clone()),
        Value::Number(n) => n.as_i64().map(|i| i.to_string()),
        _ => None,
    }
}
