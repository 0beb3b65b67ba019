//! Property-based tests: no argument value can put markup into the tree.
//!
//! ASTs are built directly so arbitrary strings reach the handlers without
//! going through the lexer's escaping rules.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use weft_eval::{execute, RenderNode};
use weft_ir::{Argument, Literal, LiteralKind, MethodCall, Node, Span};
use weft_ui::tokens::{is_attribute_text, is_safe_url, is_style_token};
use weft_ui::StandardContext;

fn string(value: &str) -> Node {
    Node::Literal(Literal {
        kind: LiteralKind::String(value.to_owned()),
        span: Span::DUMMY,
    })
}

fn call(receiver: Option<Node>, method: &str, args: Vec<Argument>) -> Node {
    Node::MethodCall(MethodCall {
        receiver: receiver.map(Box::new),
        method: method.to_owned(),
        args,
        block: None,
        span: Span::DUMMY,
    })
}

fn text_with(modifier: &str, value: &str) -> Node {
    let base = call(None, "text", vec![Argument::Positional(string("x"))]);
    call(Some(base), modifier, vec![Argument::Positional(string(value))])
}

fn has_markup(node: &RenderNode) -> bool {
    node.attributes()
        .any(|(_, v)| v.chars().any(|c| matches!(c, '<' | '>' | '"' | '\'' | '`')))
        || node.children.iter().any(has_markup)
}

proptest! {
    #[test]
    fn class_modifiers_never_emit_markup(value in any::<String>(), which in 0usize..5) {
        let modifier = ["css_class", "font_size", "text_color", "background", "id"][which];
        if let Ok(out) = execute(&text_with(modifier, &value), &StandardContext) {
            prop_assert!(!has_markup(&out.into_render_node()));
        }
    }

    #[test]
    fn aria_label_never_emits_markup(value in any::<String>()) {
        if let Ok(out) = execute(&text_with("aria_label", &value), &StandardContext) {
            let node = out.into_render_node();
            prop_assert!(!has_markup(&node));
            prop_assert!(is_attribute_text(node.attr("aria-label").unwrap()));
        }
    }

    #[test]
    fn link_hrefs_are_safe(href in any::<String>()) {
        let link = call(None, "link", vec![
            Argument::Positional(string("go")),
            Argument::Named { key: "href".into(), value: string(&href), span: Span::DUMMY },
        ]);
        match execute(&link, &StandardContext) {
            Ok(out) => {
                let node = out.into_render_node();
                prop_assert!(is_safe_url(node.attr("href").unwrap()));
            }
            Err(_) => prop_assert!(!is_safe_url(&href)),
        }
    }

    #[test]
    fn style_tokens_round_trip(token in "[a-z0-9][a-z0-9-]{0,10}") {
        prop_assert!(is_style_token(&token));
        let out = execute(&text_with("background", &token), &StandardContext).unwrap();
        let expected = format!("bg-{token}");
        prop_assert!(out.into_render_node().has_class(&expected));
    }
}
