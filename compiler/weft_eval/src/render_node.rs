//! The output tree.
//!
//! A `RenderNode` is what operations build and modifiers decorate. It says
//! nothing about final markup; turning it into HTML or anything else is the
//! host's job.

use std::fmt;

use weft_stack::ensure_sufficient_stack;

/// Tag used for bare text nodes.
pub const TEXT_TAG: &str = "#text";

/// Tag used when a multi-node result has to become a single node.
pub const FRAGMENT_TAG: &str = "#fragment";

/// One element of the output tree.
///
/// Attributes keep insertion order; setting an existing key replaces its
/// value in place. Dropping, printing and text collection do not recurse,
/// so output trees may be as deep as the executor can build them.
#[derive(Default)]
pub struct RenderNode {
    pub tag: String,
    attributes: Vec<(String, String)>,
    pub children: Vec<RenderNode>,
    pub text: Option<String>,
}

impl RenderNode {
    pub fn new(tag: impl Into<String>) -> Self {
        RenderNode {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// A bare text node.
    pub fn text_node(text: impl Into<String>) -> Self {
        RenderNode::new(TEXT_TAG).with_text(text)
    }

    /// A fragment holding `children`.
    pub fn fragment(children: Vec<RenderNode>) -> Self {
        let mut node = RenderNode::new(FRAGMENT_TAG);
        node.children = children;
        node
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<RenderNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key`, replacing an existing value in place.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Append `class` to the `class` attribute, space separated.
    pub fn add_class(&mut self, class: &str) {
        let class = class.trim();
        if class.is_empty() {
            return;
        }
        match self.attributes.iter_mut().find(|(k, _)| k == "class") {
            Some((_, existing)) if existing.is_empty() => class.clone_into(existing),
            Some((_, existing)) => {
                existing.push(' ');
                existing.push_str(class);
            }
            None => self.attributes.push(("class".to_owned(), class.to_owned())),
        }
    }

    pub fn classes(&self) -> Vec<&str> {
        self.attr("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(&class)
    }

    pub fn push_child(&mut self, child: RenderNode) {
        self.children.push(child);
    }

    /// Text of this node and all descendants, in order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            if let Some(text) = &node.text {
                out.push_str(text);
            }
            pending.extend(node.children.iter().rev());
        }
        out
    }

    fn write_line(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        write!(f, "{:indent$}", "")?;
        if self.is_text() {
            return writeln!(f, "{:?}", self.text.as_deref().unwrap_or(""));
        }
        write!(f, "{}", self.tag)?;
        for (key, value) in self.attributes() {
            write!(f, " {key}={value:?}")?;
        }
        if let Some(text) = &self.text {
            write!(f, " {text:?}")?;
        }
        writeln!(f)
    }
}

/// Indented outline, one node per line.
impl fmt::Display for RenderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![(self, 0)];
        while let Some((node, indent)) = pending.pop() {
            node.write_line(f, indent)?;
            pending.extend(node.children.iter().rev().map(|child| (child, indent + 2)));
        }
        Ok(())
    }
}

impl Drop for RenderNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl Clone for RenderNode {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| RenderNode {
            tag: self.tag.clone(),
            attributes: self.attributes.clone(),
            children: self.children.clone(),
            text: self.text.clone(),
        })
    }
}

impl PartialEq for RenderNode {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| {
            self.tag == other.tag
                && self.attributes == other.attributes
                && self.text == other.text
                && self.children == other.children
        })
    }
}

impl Eq for RenderNode {}

impl fmt::Debug for RenderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_struct("RenderNode")
                .field("tag", &self.tag)
                .field("attributes", &self.attributes)
                .field("children", &self.children)
                .field("text", &self.text)
                .finish()
        })
    }
}
