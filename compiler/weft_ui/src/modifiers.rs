//! Style modifiers.
//!
//! Every modifier returns the node it was called on with classes or
//! attributes added. Values pass through [`crate::tokens`] first.

use weft_eval::errors::{invalid_value, missing_argument};
use weft_eval::{EvalResult, Invocation, RenderNode};

use crate::tokens::{attribute_text, style_token};
use crate::StandardContext;

/// `node.name(value)` → class `prefix-value`.
fn prefixed_class(mut node: RenderNode, inv: &Invocation, prefix: &str) -> EvalResult {
    inv.reject_block()?;
    inv.expect_positional(1)?;
    inv.expect_named_only(&[])?;
    let token = style_token(inv, "argument 1", inv.positional_keyword(0)?)?;
    node.add_class(&format!("{prefix}-{token}"));
    Ok(node.into())
}

/// `node.name` → fixed class.
fn flag_class(mut node: RenderNode, inv: &Invocation, class: &str) -> EvalResult {
    inv.reject_block()?;
    inv.expect_positional(0)?;
    inv.expect_named_only(&[])?;
    node.add_class(class);
    Ok(node.into())
}

/// `padding(4)` or `padding(horizontal: 2, vertical: 4)`.
///
/// Edge keys map to `{prefix}x`, `{prefix}y`, `{prefix}t` and so on.
fn edge_spacing(mut node: RenderNode, inv: &Invocation, prefix: &str) -> EvalResult {
    const EDGES: &[(&str, &str)] = &[
        ("horizontal", "x"),
        ("vertical", "y"),
        ("top", "t"),
        ("bottom", "b"),
        ("leading", "l"),
        ("trailing", "r"),
    ];

    inv.reject_block()?;
    inv.expect_max_positional(1)?;
    let keys: Vec<&str> = EDGES.iter().map(|(key, _)| *key).collect();
    inv.expect_named_only(&keys)?;

    if inv.positional.is_empty() && inv.named.is_empty() {
        return Err(missing_argument(&inv.method, "argument 1"));
    }
    if !inv.positional.is_empty() {
        let all = style_token(inv, "argument 1", inv.positional_keyword(0)?)?;
        node.add_class(&format!("{prefix}-{all}"));
    }
    for (key, suffix) in EDGES {
        if let Some(value) = inv.named_keyword(key)? {
            let value = style_token(inv, key, value)?;
            node.add_class(&format!("{prefix}{suffix}-{value}"));
        }
    }
    Ok(node.into())
}

pub(crate) fn font_size(_: &StandardContext, node: RenderNode, inv: Invocation) -> EvalResult {
    prefixed_class(node, &inv, "text")
}

pub(crate) fn font_weight(_: &StandardContext, node: RenderNode, inv: Invocation) -> EvalResult {
    prefixed_class(node, &inv, "font")
}

pub(crate) fn text_color(_: &StandardContext, node: RenderNode, inv: Invocation) -> EvalResult {
    prefixed_class(node, &inv, "text")
}

pub(crate) fn background(_: &StandardContext, node: RenderNode, inv: Invocation) -> EvalResult {
    prefixed_class(node, &inv, "bg")
}

pub(crate) fn padding(_: &StandardContext, node: RenderNode, inv: Invocation) -> EvalResult {
    edge_spacing(node, &inv, "p")
}

pub(crate) fn margin(_: &StandardContext, node: RenderNode, inv: Invocation) -> EvalResult {
    edge_spacing(node, &inv, "m")
}

pub(crate) fn corner_radius(_: &StandardContext, node: RenderNode, inv: Invocation) -> EvalResult {
    prefixed_class(node, &inv, "rounded")
}

/// `border`, `border(2)`, `border(color: "gray-200")`.
pub(crate) fn border(_: &StandardContext, mut node: RenderNode, inv: Invocation) -> EvalResult {
    inv.reject_block()?;
    inv.expect_max_positional(1)?;
    inv.expect_named_only(&["color"])?;
    if inv.positional.is_empty() {
        node.add_class("border");
    } else {
        let width = style_token(&inv, "argument 1", inv.positional_keyword(0)?)?;
        node.add_class(&format!("border-{width}"));
    }
    if let Some(color) = inv.named_keyword("color")? {
        let color = style_token(&inv, "color", color)?;
        node.add_class(&format!("border-{color}"));
    }
    Ok(node.into())
}

/// `shadow` or `shadow(:lg)`.
pub(crate) fn shadow(_: &StandardContext, node: RenderNode, inv: Invocation) -> EvalResult {
    if inv.positional.is_empty() {
        flag_class(node, &inv, "shadow")
    } else {
        prefixed_class(node, &inv, "shadow")
    }
}

/// `opacity(50)`; a percentage from 0 to 100.
pub(crate) fn opacity(_: &StandardContext, mut node: RenderNode, inv: Invocation) -> EvalResult {
    inv.reject_block()?;
    inv.expect_positional(1)?;
    inv.expect_named_only(&[])?;
    let percent = match inv.positional_number(0)?.as_i64() {
        Some(percent @ 0..=100) => percent,
        _ => {
            return Err(invalid_value(
                "opacity",
                "argument 1",
                "must be an integer percentage from 0 to 100",
            ))
        }
    };
    node.add_class(&format!("opacity-{percent}"));
    Ok(node.into())
}

/// `frame(width: :full, height: 64)`; at least one dimension.
pub(crate) fn frame(_: &StandardContext, mut node: RenderNode, inv: Invocation) -> EvalResult {
    inv.reject_block()?;
    inv.expect_positional(0)?;
    inv.expect_named_only(&["width", "height"])?;
    let width = inv.named_keyword("width")?;
    let height = inv.named_keyword("height")?;
    if width.is_none() && height.is_none() {
        return Err(missing_argument("frame", "width"));
    }
    if let Some(width) = width {
        let width = style_token(&inv, "width", width)?;
        node.add_class(&format!("w-{width}"));
    }
    if let Some(height) = height {
        let height = style_token(&inv, "height", height)?;
        node.add_class(&format!("h-{height}"));
    }
    Ok(node.into())
}

pub(crate) fn bold(_: &StandardContext, node: RenderNode, inv: Invocation) -> EvalResult {
    flag_class(node, &inv, "font-bold")
}

pub(crate) fn italic(_: &StandardContext, node: RenderNode, inv: Invocation) -> EvalResult {
    flag_class(node, &inv, "italic")
}

pub(crate) fn underline(_: &StandardContext, node: RenderNode, inv: Invocation) -> EvalResult {
    flag_class(node, &inv, "underline")
}

pub(crate) fn hidden(_: &StandardContext, node: RenderNode, inv: Invocation) -> EvalResult {
    flag_class(node, &inv, "hidden")
}

/// `css_class("card-compact md:flex")`; each class is checked on its own.
pub(crate) fn css_class(_: &StandardContext, mut node: RenderNode, inv: Invocation) -> EvalResult {
    inv.reject_block()?;
    inv.expect_positional(1)?;
    inv.expect_named_only(&[])?;
    let classes = inv.positional_symbol_or_str(0)?;
    if classes.trim().is_empty() {
        return Err(invalid_value("css_class", "argument 1", "no class given"));
    }
    for class in classes.split_whitespace() {
        let class = style_token(&inv, "argument 1", class.to_owned())?;
        node.add_class(&class);
    }
    Ok(node.into())
}

pub(crate) fn id(_: &StandardContext, node: RenderNode, inv: Invocation) -> EvalResult {
    inv.reject_block()?;
    inv.expect_positional(1)?;
    inv.expect_named_only(&[])?;
    let id = style_token(&inv, "argument 1", inv.positional_symbol_or_str(0)?.to_owned())?;
    Ok(node.with_attr("id", id).into())
}

pub(crate) fn aria_label(_: &StandardContext, node: RenderNode, inv: Invocation) -> EvalResult {
    inv.reject_block()?;
    inv.expect_positional(1)?;
    inv.expect_named_only(&[])?;
    let label = attribute_text(&inv, "argument 1", inv.positional_str(0)?)?;
    Ok(node.with_attr("aria-label", label).into())
}
