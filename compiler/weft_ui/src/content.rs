//! Leaf and content operations.

use weft_eval::errors::invalid_value;
use weft_eval::{EvalResult, Invocation, RenderNode};

use crate::tokens::{attribute_text, style_token, url};
use crate::StandardContext;

/// Shape shared by single-content leaves: one positional, no block.
fn content_leaf(inv: &Invocation, named: &[&str]) -> EvalResult<String> {
    inv.reject_block()?;
    inv.expect_max_positional(1)?;
    inv.expect_named_only(named)?;
    inv.positional_text(0)
}

pub(crate) fn text(_: &StandardContext, inv: Invocation) -> EvalResult {
    let content = content_leaf(&inv, &[])?;
    Ok(RenderNode::new("span").with_text(content).into())
}

/// `heading("Title", level: 2)`; level defaults to 1.
pub(crate) fn heading(_: &StandardContext, inv: Invocation) -> EvalResult {
    let content = content_leaf(&inv, &["level"])?;
    let level = match inv.named_number("level")? {
        None => 1,
        Some(n) => match n.as_i64() {
            Some(level @ 1..=6) => level,
            _ => return Err(invalid_value("heading", "level", "must be an integer from 1 to 6")),
        },
    };
    Ok(RenderNode::new(format!("h{level}")).with_text(content).into())
}

pub(crate) fn paragraph(_: &StandardContext, inv: Invocation) -> EvalResult {
    let content = content_leaf(&inv, &[])?;
    Ok(RenderNode::new("p").with_text(content).into())
}

/// `button("Save", variant: :primary)`
pub(crate) fn button(_: &StandardContext, inv: Invocation) -> EvalResult {
    let label = content_leaf(&inv, &["variant", "disabled"])?;
    let mut node = RenderNode::new("button")
        .with_attr("type", "button")
        .with_class("btn")
        .with_text(label);
    if let Some(variant) = inv.named_symbol_or_str("variant")? {
        let variant = style_token(&inv, "variant", variant.to_owned())?;
        node.add_class(&format!("btn-{variant}"));
    }
    if inv.named_bool("disabled")? == Some(true) {
        node.set_attr("disabled", "disabled");
    }
    Ok(node.into())
}

/// `link("Docs", href: "/docs")`
pub(crate) fn link(_: &StandardContext, inv: Invocation) -> EvalResult {
    let label = content_leaf(&inv, &["href"])?;
    let href = url(&inv, "href", inv.required_named_str("href")?)?;
    let mut node = RenderNode::new("a").with_attr("href", href).with_text(label);
    if href.starts_with("http") {
        node.set_attr("rel", "noopener noreferrer");
    }
    Ok(node.into())
}

/// `image("/logo.png", alt: "Logo")`; `alt` is always emitted.
pub(crate) fn image(_: &StandardContext, inv: Invocation) -> EvalResult {
    inv.reject_block()?;
    inv.expect_positional(1)?;
    inv.expect_named_only(&["alt"])?;
    let src = url(&inv, "argument 1", inv.positional_str(0)?)?;
    let alt = attribute_text(&inv, "alt", inv.named_str("alt")?.unwrap_or(""))?;
    Ok(RenderNode::new("img")
        .with_attr("src", src)
        .with_attr("alt", alt)
        .into())
}

pub(crate) fn divider(_: &StandardContext, inv: Invocation) -> EvalResult {
    inv.reject_block()?;
    inv.expect_positional(0)?;
    inv.expect_named_only(&[])?;
    Ok(RenderNode::new("hr").into())
}

pub(crate) fn spacer(_: &StandardContext, inv: Invocation) -> EvalResult {
    inv.reject_block()?;
    inv.expect_positional(0)?;
    inv.expect_named_only(&[])?;
    Ok(RenderNode::new("div").with_class("flex-1").into())
}

pub(crate) fn badge(_: &StandardContext, inv: Invocation) -> EvalResult {
    let content = content_leaf(&inv, &[])?;
    Ok(RenderNode::new("span")
        .with_class("badge")
        .with_text(content)
        .into())
}

/// `list_item("A")` or `list_item do ... end`
pub(crate) fn list_item(_: &StandardContext, mut inv: Invocation) -> EvalResult {
    inv.expect_max_positional(1)?;
    inv.expect_named_only(&[])?;
    let mut node = RenderNode::new("li");
    if !inv.positional.is_empty() {
        node.text = Some(inv.positional_text(0)?);
    }
    Ok(node.with_children(inv.take_children()).into())
}
