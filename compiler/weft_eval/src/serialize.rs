//! JSON-friendly serialization for execution output.
//!
//! Values serialize untagged: scalars as JSON scalars, symbols as `":name"`,
//! nodes as objects with empty fields omitted.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use weft_ir::Number;
use weft_stack::ensure_sufficient_stack;

use crate::{RenderNode, Value};

struct Attributes<'a>(&'a RenderNode);

impl Serialize for Attributes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.0.attributes() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for RenderNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ensure_sufficient_stack(|| self.serialize_fields(serializer))
    }
}

impl RenderNode {
    fn serialize_fields<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let has_attrs = self.attributes().next().is_some();
        let len = 1
            + usize::from(has_attrs)
            + usize::from(self.text.is_some())
            + usize::from(!self.children.is_empty());
        let mut node = serializer.serialize_struct("RenderNode", len)?;
        node.serialize_field("tag", &self.tag)?;
        if has_attrs {
            node.serialize_field("attributes", &Attributes(self))?;
        } else {
            node.skip_field("attributes")?;
        }
        if let Some(text) = &self.text {
            node.serialize_field("text", text)?;
        } else {
            node.skip_field("text")?;
        }
        if self.children.is_empty() {
            node.skip_field("children")?;
        } else {
            node.serialize_field("children", &self.children)?;
        }
        node.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Str(s) => serializer.serialize_str(s),
            Value::Number(Number::Int(n)) => serializer.serialize_i64(*n),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Nil => serializer.serialize_none(),
            Value::Symbol(s) => serializer.collect_str(&format_args!(":{s}")),
            Value::Node(node) => node.serialize(serializer),
            Value::Fragment(nodes) => nodes.serialize(serializer),
        }
    }
}
