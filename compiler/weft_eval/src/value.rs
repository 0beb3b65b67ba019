//! Runtime values.

use std::fmt;

use weft_ir::{LiteralKind, Number};

use crate::{RenderNode, FRAGMENT_TAG};

/// A value produced while executing a program.
///
/// Scalars come from literals; `Node` and `Fragment` come from operations.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Number(Number),
    Bool(bool),
    Nil,
    /// Symbol name without the leading colon.
    Symbol(String),
    Node(RenderNode),
    /// Several sibling nodes, produced by a multi-statement program or an
    /// operation that expands to more than one node.
    Fragment(Vec<RenderNode>),
}

impl Value {
    pub fn from_literal(kind: &LiteralKind) -> Self {
        match kind {
            LiteralKind::String(s) => Value::Str(s.clone()),
            LiteralKind::Number(n) => Value::Number(*n),
            LiteralKind::Boolean(b) => Value::Bool(*b),
            LiteralKind::Nil => Value::Nil,
            LiteralKind::Symbol(s) => Value::Symbol(s.clone()),
        }
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Nil => "nil",
            Value::Symbol(_) => "symbol",
            Value::Node(_) => "node",
            Value::Fragment(_) => "fragment",
        }
    }

    pub fn is_renderable(&self) -> bool {
        matches!(self, Value::Node(_) | Value::Fragment(_))
    }

    pub fn as_node(&self) -> Option<&RenderNode> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Flatten into the nodes this value contributes to a parent.
    ///
    /// Scalars become text nodes; `nil` contributes nothing.
    pub fn into_nodes(self) -> Vec<RenderNode> {
        match self {
            Value::Node(node) => vec![node],
            Value::Fragment(nodes) => nodes,
            Value::Nil => Vec::new(),
            scalar => vec![RenderNode::text_node(scalar.to_string())],
        }
    }

    /// Collapse into one node; several nodes are wrapped in a fragment.
    pub fn into_render_node(self) -> RenderNode {
        match self {
            Value::Node(node) => node,
            other => {
                let mut nodes = other.into_nodes();
                if nodes.len() == 1 && nodes[0].tag != FRAGMENT_TAG {
                    if let Some(node) = nodes.pop() {
                        return node;
                    }
                }
                RenderNode::fragment(nodes)
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => f.write_str("nil"),
            Value::Symbol(s) => write!(f, ":{s}"),
            Value::Node(node) => write!(f, "{node}"),
            Value::Fragment(nodes) => {
                for node in nodes {
                    write!(f, "{node}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<RenderNode> for Value {
    fn from(node: RenderNode) -> Self {
        Value::Node(node)
    }
}
