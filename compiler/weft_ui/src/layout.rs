//! Container operations. Block contents become children in order.

use weft_eval::errors::invalid_value;
use weft_eval::{EvalResult, Invocation, RenderNode};

use crate::tokens::{attribute_text, style_token};
use crate::StandardContext;

#[derive(Clone, Copy)]
enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    fn direction_class(self) -> &'static str {
        match self {
            Axis::Vertical => "flex-col",
            Axis::Horizontal => "flex-row",
        }
    }

    fn spacing_prefix(self) -> &'static str {
        match self {
            Axis::Vertical => "space-y",
            Axis::Horizontal => "space-x",
        }
    }

    /// Cross-axis alignment class for `alignment:`.
    fn alignment_class(self, alignment: &str) -> Option<&'static str> {
        let class = match (self, alignment) {
            (_, "center") => "items-center",
            (_, "stretch") => "items-stretch",
            (_, "start") | (Axis::Vertical, "leading") | (Axis::Horizontal, "top") => {
                "items-start"
            }
            (_, "end") | (Axis::Vertical, "trailing") | (Axis::Horizontal, "bottom") => {
                "items-end"
            }
            (Axis::Horizontal, "baseline") => "items-baseline",
            _ => return None,
        };
        Some(class)
    }
}

fn stack(axis: Axis, mut inv: Invocation) -> EvalResult {
    inv.expect_positional(0)?;
    inv.expect_named_only(&["spacing", "alignment"])?;

    let mut node = RenderNode::new("div")
        .with_class("flex")
        .with_class(axis.direction_class());

    if let Some(spacing) = inv.named_keyword("spacing")? {
        let spacing = style_token(&inv, "spacing", spacing)?;
        node.add_class(&format!("{}-{spacing}", axis.spacing_prefix()));
    }
    if let Some(alignment) = inv.named_symbol_or_str("alignment")? {
        let Some(class) = axis.alignment_class(alignment) else {
            return Err(invalid_value(
                &inv.method,
                "alignment",
                format!("unknown alignment `{alignment}`"),
            ));
        };
        node.add_class(class);
    }

    Ok(node.with_children(inv.take_children()).into())
}

/// `vstack(spacing: 4, alignment: :center) do ... end`
pub(crate) fn vstack(_: &StandardContext, inv: Invocation) -> EvalResult {
    stack(Axis::Vertical, inv)
}

pub(crate) fn hstack(_: &StandardContext, inv: Invocation) -> EvalResult {
    stack(Axis::Horizontal, inv)
}

/// Children layered on top of each other.
pub(crate) fn zstack(_: &StandardContext, mut inv: Invocation) -> EvalResult {
    inv.expect_positional(0)?;
    inv.expect_named_only(&[])?;
    Ok(RenderNode::new("div")
        .with_class("relative")
        .with_children(inv.take_children())
        .into())
}

/// `card(title: "Profile") do ... end`; the title becomes a leading `h3`.
pub(crate) fn card(_: &StandardContext, mut inv: Invocation) -> EvalResult {
    inv.expect_positional(0)?;
    inv.expect_named_only(&["title"])?;
    let mut node = RenderNode::new("div").with_class("card");
    if let Some(title) = inv.named_str("title")? {
        node.set_attr("aria-label", attribute_text(&inv, "title", title)?);
        node.push_child(
            RenderNode::new("h3")
                .with_class("card-title")
                .with_text(title),
        );
    }
    Ok(node.with_children(inv.take_children()).into())
}

/// `list do ... end`, or `list(ordered: true)` for `ol`.
pub(crate) fn list(_: &StandardContext, mut inv: Invocation) -> EvalResult {
    inv.expect_positional(0)?;
    inv.expect_named_only(&["ordered"])?;
    let tag = if inv.named_bool("ordered")? == Some(true) {
        "ol"
    } else {
        "ul"
    };
    Ok(RenderNode::new(tag).with_children(inv.take_children()).into())
}
