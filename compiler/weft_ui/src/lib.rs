//! Standard capability context for the Weft UI DSL.
//!
//! [`StandardContext`] offers layout containers, content leaves and style
//! modifiers, and produces a `RenderNode` tree annotated with CSS utility
//! classes. It is stateless; the capability table is built once per process.
//!
//! ```text
//! vstack(spacing: 4, alignment: :center) do
//!   heading("Welcome", level: 2)
//!   text("Hello").font_size(:lg).text_color("gray-600")
//!   button("Start", variant: :primary)
//! end
//! ```

mod content;
mod layout;
mod modifiers;
pub mod tokens;

use std::sync::OnceLock;

use weft_eval::{CapabilityContext, CapabilityTable};

static STANDARD_TABLE: OnceLock<CapabilityTable<StandardContext>> = OnceLock::new();

/// The reference capability context.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardContext;

impl StandardContext {
    pub fn new() -> Self {
        StandardContext
    }

    /// Every name this context answers to, sorted.
    pub fn names() -> Vec<&'static str> {
        standard_table().names()
    }
}

impl CapabilityContext for StandardContext {
    fn capabilities(&self) -> &CapabilityTable<Self> {
        standard_table()
    }
}

fn standard_table() -> &'static CapabilityTable<StandardContext> {
    STANDARD_TABLE.get_or_init(build_table)
}

fn build_table() -> CapabilityTable<StandardContext> {
    tracing::debug!("building standard capability table");
    CapabilityTable::new()
        // Layout
        .with_operation("vstack", layout::vstack)
        .with_operation("hstack", layout::hstack)
        .with_operation("zstack", layout::zstack)
        .with_operation("card", layout::card)
        .with_operation("list", layout::list)
        // Content
        .with_operation("text", content::text)
        .with_operation("heading", content::heading)
        .with_operation("paragraph", content::paragraph)
        .with_operation("button", content::button)
        .with_operation("link", content::link)
        .with_operation("image", content::image)
        .with_operation("divider", content::divider)
        .with_operation("spacer", content::spacer)
        .with_operation("badge", content::badge)
        .with_operation("list_item", content::list_item)
        // Typography and color
        .with_modifier("font_size", modifiers::font_size)
        .with_modifier("font_weight", modifiers::font_weight)
        .with_modifier("text_color", modifiers::text_color)
        .with_modifier("background", modifiers::background)
        .with_modifier("bold", modifiers::bold)
        .with_modifier("italic", modifiers::italic)
        .with_modifier("underline", modifiers::underline)
        // Box model
        .with_modifier("padding", modifiers::padding)
        .with_modifier("margin", modifiers::margin)
        .with_modifier("corner_radius", modifiers::corner_radius)
        .with_modifier("border", modifiers::border)
        .with_modifier("shadow", modifiers::shadow)
        .with_modifier("opacity", modifiers::opacity)
        .with_modifier("frame", modifiers::frame)
        .with_modifier("hidden", modifiers::hidden)
        // Attributes
        .with_modifier("css_class", modifiers::css_class)
        .with_modifier("id", modifiers::id)
        .with_modifier("aria_label", modifiers::aria_label)
}
