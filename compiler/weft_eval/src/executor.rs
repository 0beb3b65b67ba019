//! Tree-walking executor.

use weft_ir::{Argument, MethodCall, Node};
use weft_stack::ensure_sufficient_stack;

use crate::errors::{no_such_method, unknown_operation};
use crate::{CapabilityContext, EvalResult, Invocation, RenderNode, Scope, Value};

/// Walks an AST against one capability context.
///
/// The executor holds no state besides the context reference; the same
/// executor can run any number of trees.
pub struct Executor<'c, C: CapabilityContext> {
    ctx: &'c C,
}

impl<'c, C: CapabilityContext> Executor<'c, C> {
    pub fn new(ctx: &'c C) -> Self {
        Executor { ctx }
    }

    /// Execute a parsed program.
    ///
    /// A multi-statement root yields `Value::Fragment`.
    pub fn execute(&self, node: &Node) -> EvalResult {
        let root = Scope::root();
        match node {
            Node::Block(block) => {
                tracing::debug!(statements = block.len(), "executing program");
                self.eval_statements(&block.statements, &root)
                    .map(Value::Fragment)
            }
            other => self.eval_node(other, &root),
        }
    }

    fn eval_node(&self, node: &Node, scope: &Scope<'_>) -> EvalResult {
        ensure_sufficient_stack(|| match node {
            Node::Literal(lit) => Ok(Value::from_literal(&lit.kind)),
            Node::MethodCall(call) => self.eval_call(call, scope),
            Node::Block(block) => self
                .eval_statements(&block.statements, scope)
                .map(Value::Fragment),
        })
    }

    /// Receiver, then arguments left to right, then the block, then dispatch.
    #[tracing::instrument(
        level = "debug",
        skip(self, call, scope),
        fields(method = %call.method, depth = scope.depth())
    )]
    fn eval_call(&self, call: &MethodCall, scope: &Scope<'_>) -> EvalResult {
        let receiver = match &call.receiver {
            Some(receiver) => Some(self.eval_node(receiver, scope)?),
            None => None,
        };

        let mut invocation = Invocation::new(call.method.as_str(), call.span);
        for arg in &call.args {
            match arg {
                Argument::Positional(value) => {
                    invocation.positional.push(self.eval_node(value, scope)?);
                }
                Argument::Named { key, value, .. } => {
                    let value = self.eval_node(value, scope)?;
                    invocation.named.push((key.clone(), value));
                }
            }
        }

        if let Some(block) = &call.block {
            let inner = scope.child(&call.method);
            invocation.children = Some(self.eval_statements(&block.statements, &inner)?);
        }

        self.dispatch(receiver, invocation)
            .map_err(|err| err.with_span(call.span))
    }

    fn dispatch(&self, receiver: Option<Value>, invocation: Invocation) -> EvalResult {
        let table = self.ctx.capabilities();
        let name = invocation.method.as_str();

        match receiver {
            None => match table.operation(name) {
                Some(op) => op(self.ctx, invocation),
                None if table.has_modifier(name) => Err(no_such_method(name, "the top level")),
                None => Err(unknown_operation(name)),
            },
            Some(Value::Node(node)) => match table.modifier(name) {
                Some(modifier) => modifier(self.ctx, node, invocation),
                None => Err(self.not_a_modifier(name, "a node")),
            },
            Some(Value::Fragment(nodes)) => {
                let Some(modifier) = table.modifier(name) else {
                    return Err(self.not_a_modifier(name, "a fragment"));
                };
                let mut out = Vec::with_capacity(nodes.len());
                for node in nodes {
                    out.extend(modifier(self.ctx, node, invocation.clone())?.into_nodes());
                }
                Ok(Value::Fragment(out))
            }
            Some(scalar) => {
                let receiver = match scalar {
                    Value::Nil => "nil".to_owned(),
                    other => format!("a {}", other.type_name()),
                };
                Err(self.not_a_modifier(name, &receiver))
            }
        }
    }

    #[cold]
    fn not_a_modifier(&self, name: &str, receiver: &str) -> crate::ExecutionError {
        let table = self.ctx.capabilities();
        if table.has_operation(name) || table.has_modifier(name) {
            no_such_method(name, receiver)
        } else {
            unknown_operation(name)
        }
    }

    fn eval_statements(
        &self,
        statements: &[Node],
        scope: &Scope<'_>,
    ) -> EvalResult<Vec<RenderNode>> {
        tracing::trace!(depth = scope.depth(), statements = statements.len(), "block");
        let mut children = Vec::with_capacity(statements.len());
        for stmt in statements {
            let value = self.eval_node(stmt, scope).map_err(|err| {
                if scope.is_root() {
                    err
                } else {
                    err.within(scope.path())
                }
            })?;
            children.extend(value.into_nodes());
        }
        Ok(children)
    }
}
