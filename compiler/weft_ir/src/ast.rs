//! Abstract syntax tree.
//!
//! The tree is built once by the parser and never mutated afterwards.
//! Every `MethodCall::method` has already been cleared by the security
//! policy; nothing downstream re-validates names.

use std::fmt;

use weft_stack::ensure_sufficient_stack;

use crate::{Number, Span};

/// A node in the syntax tree.
///
/// Trees can be as deep as the parser's nesting limit allows, so the
/// recursive trait impls grow the stack and dropping is iterative.
pub enum Node {
    MethodCall(MethodCall),
    Literal(Literal),
    /// Multi-statement program root.
    Block(Block),
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::MethodCall(call) => call.span,
            Node::Literal(lit) => lit.span,
            Node::Block(block) => block.span,
        }
    }

    pub fn as_call(&self) -> Option<&MethodCall> {
        match self {
            Node::MethodCall(call) => Some(call),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Visit every method call in the tree, receivers before the call they
    /// feed, arguments before blocks.
    pub fn walk_calls<'a>(&'a self, visit: &mut dyn FnMut(&'a MethodCall)) {
        ensure_sufficient_stack(|| match self {
            Node::MethodCall(call) => {
                if let Some(receiver) = &call.receiver {
                    receiver.walk_calls(visit);
                }
                visit(call);
                for arg in &call.args {
                    arg.value().walk_calls(visit);
                }
                if let Some(block) = &call.block {
                    for stmt in &block.statements {
                        stmt.walk_calls(visit);
                    }
                }
            }
            Node::Literal(_) => {}
            Node::Block(block) => {
                for stmt in &block.statements {
                    stmt.walk_calls(visit);
                }
            }
        });
    }

    /// All method names in visiting order.
    pub fn method_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.walk_calls(&mut |call| names.push(call.method.as_str()));
        names
    }

    /// Move this node's direct children into `out`.
    fn detach_children(&mut self, out: &mut Vec<Node>) {
        match self {
            Node::MethodCall(call) => {
                if let Some(receiver) = call.receiver.take() {
                    out.push(*receiver);
                }
                out.extend(call.args.drain(..).map(Argument::into_value));
                if let Some(block) = call.block.take() {
                    out.extend(block.statements);
                }
            }
            Node::Block(block) => out.append(&mut block.statements),
            Node::Literal(_) => {}
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Node::MethodCall(call) => Node::MethodCall(call.clone()),
            Node::Literal(lit) => Node::Literal(lit.clone()),
            Node::Block(block) => Node::Block(block.clone()),
        })
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Node::MethodCall(a), Node::MethodCall(b)) => a == b,
            (Node::Literal(a), Node::Literal(b)) => a == b,
            (Node::Block(a), Node::Block(b)) => a == b,
            _ => false,
        })
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Node::MethodCall(call) => f.debug_tuple("MethodCall").field(call).finish(),
            Node::Literal(lit) => f.debug_tuple("Literal").field(lit).finish(),
            Node::Block(block) => f.debug_tuple("Block").field(block).finish(),
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Node {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ensure_sufficient_stack(|| match self {
            Node::MethodCall(call) => {
                serializer.serialize_newtype_variant("Node", 0, "MethodCall", call)
            }
            Node::Literal(lit) => serializer.serialize_newtype_variant("Node", 1, "Literal", lit),
            Node::Block(block) => serializer.serialize_newtype_variant("Node", 2, "Block", block),
        })
    }
}

/// `receiver.method(args) { block }`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MethodCall {
    /// `None` for a top-level call; the previous link for a chained call.
    pub receiver: Option<Box<Node>>,
    pub method: String,
    pub args: Vec<Argument>,
    pub block: Option<Block>,
    pub span: Span,
}

impl MethodCall {
    /// Named arguments in source order.
    pub fn named_args(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.args.iter().filter_map(|arg| match arg {
            Argument::Named { key, value, .. } => Some((key.as_str(), value)),
            Argument::Positional(_) => None,
        })
    }

    /// Positional arguments in source order.
    pub fn positional_args(&self) -> impl Iterator<Item = &Node> {
        self.args.iter().filter_map(|arg| match arg {
            Argument::Positional(value) => Some(value),
            Argument::Named { .. } => None,
        })
    }

    /// The receiver as a method call, if this is a chained call on one.
    pub fn receiver_call(&self) -> Option<&MethodCall> {
        self.receiver.as_deref().and_then(Node::as_call)
    }

    /// Method names along the chain, innermost receiver first.
    ///
    /// `text("Hi").font_size("xl")` yields `["text", "font_size"]`.
    pub fn chain_methods(&self) -> Vec<&str> {
        let mut chain = vec![self.method.as_str()];
        let mut current = self.receiver_call();
        while let Some(call) = current {
            chain.push(call.method.as_str());
            current = call.receiver_call();
        }
        chain.reverse();
        chain
    }
}

/// A call argument.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Argument {
    Positional(Node),
    /// `key: value`; keys are unique within one call.
    Named { key: String, value: Node, span: Span },
}

impl Argument {
    pub fn value(&self) -> &Node {
        match self {
            Argument::Positional(value) | Argument::Named { value, .. } => value,
        }
    }

    pub fn into_value(self) -> Node {
        match self {
            Argument::Positional(value) | Argument::Named { value, .. } => value,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Argument::Positional(_) => None,
            Argument::Named { key, .. } => Some(key),
        }
    }
}

/// A leaf value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Literal {
    pub kind: LiteralKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LiteralKind {
    String(String),
    Number(Number),
    Boolean(bool),
    Nil,
    /// Symbol name without the leading colon.
    Symbol(String),
}

/// Ordered statements of a `do ... end` / `{ ... }` body or a program.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Block {
    pub statements: Vec<Node>,
    pub span: Span,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }
}
