//! End-to-end behavior of the tokenize → parse → execute pipeline.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use weft_diagnostic::{ErrorCode, LineOffsetTable};
use weft_ir::{LiteralKind, Node, Number};
use weft_ui::StandardContext;
use weftc::{Error, Interpreter, RenderNode, Value};

fn render(source: &str) -> RenderNode {
    Interpreter::default()
        .render(source, &StandardContext)
        .unwrap_or_else(|err| panic!("failed on {source:?}: {err}"))
}

#[test]
fn hello_world_round_trip() {
    let value = Interpreter::default()
        .interpret("text(\"Hello World\")", &StandardContext)
        .unwrap();
    let Value::Node(node) = value else {
        panic!("expected a node");
    };
    assert_eq!(node.tag, "span");
    assert_eq!(node.text.as_deref(), Some("Hello World"));
    assert!(node.children.is_empty());
}

#[test]
fn chains_are_left_associative() {
    let ast = Interpreter::default()
        .parse_source("text(\"Hi\").font_size(\"xl\").text_color(\"blue\")")
        .unwrap();
    let outer = ast.as_call().unwrap();
    assert_eq!(outer.method, "text_color");
    let middle = outer.receiver_call().unwrap();
    assert_eq!(middle.method, "font_size");
    let inner = middle.receiver_call().unwrap();
    assert_eq!(inner.method, "text");
    assert!(inner.receiver.is_none());
    assert_eq!(outer.chain_methods(), vec!["text", "font_size", "text_color"]);
}

#[test]
fn modifiers_apply_in_source_order() {
    let node = render("text(\"Hi\").font_size(\"xl\").text_color(\"blue\")");
    assert_eq!(node.classes(), vec!["text-xl", "text-blue"]);
}

#[test]
fn block_children_keep_order() {
    let node = render("vstack(spacing: 4) { text(\"A\"); text(\"B\") }");
    assert!(node.has_class("space-y-4"));
    let texts: Vec<_> = node.children.iter().map(RenderNode::text_content).collect();
    assert_eq!(texts, vec!["A", "B"]);
}

#[test]
fn named_arguments_in_order() {
    let ast = Interpreter::default()
        .parse_source("vstack(spacing: 16, alignment: :center)")
        .unwrap();
    let call = ast.as_call().unwrap();
    let named: Vec<(&str, &Node)> = call.named_args().collect();
    assert_eq!(named.len(), 2);
    assert_eq!(named[0].0, "spacing");
    assert_eq!(
        named[0].1.as_literal().map(|l| &l.kind),
        Some(&LiteralKind::Number(Number::Int(16)))
    );
    assert_eq!(named[1].0, "alignment");
    assert_eq!(
        named[1].1.as_literal().map(|l| &l.kind),
        Some(&LiteralKind::Symbol("center".into()))
    );
}

#[test]
fn parsing_is_idempotent() {
    let source = "card(title: \"A\") do\n  # note\n  text(\"x\").bold\n  divider\nend";
    let interp = Interpreter::default();
    assert_eq!(
        interp.parse_source(source).unwrap(),
        interp.parse_source(source).unwrap()
    );
    assert_eq!(render(source), render(source));
}

#[test]
fn multi_statement_programs_are_fragments() {
    let value = Interpreter::default()
        .interpret("heading(\"T\")\nparagraph(\"p\")", &StandardContext)
        .unwrap();
    let Value::Fragment(nodes) = value else {
        panic!("expected a fragment");
    };
    let tags: Vec<&str> = nodes.iter().map(|n| n.tag.as_str()).collect();
    assert_eq!(tags, vec!["h1", "p"]);
}

#[test]
fn full_page() {
    let source = r#"
=begin
Landing page
=end
vstack(spacing: 6, alignment: :center) do
  heading("Welcome", level: 1).font_weight(:bold)
  text("Build interfaces safely.").text_color("gray-600")
  hstack(spacing: 2) {
    button("Start", variant: :primary)
    link("Docs", href: "/docs").underline
  }
  card(title: "Stats") do
    list do
      list_item("Fast")
      list_item { badge("new") }
    end
  end.padding(4).shadow(:md)
end
"#;
    let node = render(source);
    assert_eq!(node.tag, "div");
    assert_eq!(node.children.len(), 4);
    assert_eq!(node.children[2].children[1].attr("href"), Some("/docs"));
    assert!(node.children[3].has_class("shadow-md"));
    assert_eq!(node.text_content(), "WelcomeBuild interfaces safely.StartDocsStatsFastnew");
}

// === Errors ===

#[test]
fn empty_input_is_a_parse_error() {
    for source in ["", "   \n\t", "# only a comment\n"] {
        let err = Interpreter::default().parse_source(source).unwrap_err();
        assert_eq!(err.code(), ErrorCode::E1009, "{source:?}");
    }
}

#[test]
fn depth_limit_boundary() {
    fn nested(depth: usize) -> String {
        format!("{}text(\"x\"){}", "vstack { ".repeat(depth - 1), " }".repeat(depth - 1))
    }
    let interp = Interpreter::builder().max_depth(8).build();
    assert!(interp.render(&nested(8), &StandardContext).is_ok());
    let err = interp.render(&nested(10), &StandardContext).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1005);
}

#[test]
fn raised_depth_limit_handles_very_deep_programs() {
    const DEPTH: usize = 50_000;
    let source = format!("{}{}", "list do ".repeat(DEPTH), "end ".repeat(DEPTH));
    let interp = Interpreter::builder().max_depth(DEPTH + 10).build();

    let ast = interp.parse_source(&source).unwrap();
    assert_eq!(ast.method_names().len(), DEPTH);
    let json = serde_json::to_string(&ast).unwrap();
    assert!(json.starts_with("{\"MethodCall\""));
    drop(ast);

    let node = interp.render(&source, &StandardContext).unwrap();
    assert_eq!(node.tag, "ul");
    assert_eq!(node.text_content(), "");
    let json = serde_json::to_string(&node).unwrap();
    assert!(json.starts_with("{\"tag\":\"ul\""));
    drop(node);
}

#[test]
fn chain_limit() {
    let interp = Interpreter::builder().max_chain_length(2).build();
    assert!(interp.render("text(\"a\").bold.italic", &StandardContext).is_ok());
    let err = interp
        .render("text(\"a\").bold.italic.underline", &StandardContext)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1006);
}

#[test]
fn execution_errors_surface_with_location() {
    let source = "vstack do\n  heading(\"x\", level: 9)\nend";
    let err = Interpreter::default()
        .interpret(source, &StandardContext)
        .unwrap_err();
    assert!(matches!(err, Error::Execution(_)));
    assert_eq!(err.phase(), "execution");
    let span = err.span().unwrap();
    let table = LineOffsetTable::build(source);
    assert_eq!(table.span_start(source, span), (2, 3));
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E3008);
    assert_eq!(diag.notes, vec!["inside `vstack`".to_string()]);
}

#[test]
fn lex_errors_have_positions() {
    let source = "text(\"a\")\ntext(\"unterminated)";
    let err = Interpreter::default().parse_source(source).unwrap_err();
    assert!(matches!(err, Error::Lex(_)));
    assert_eq!(err.code(), ErrorCode::E0001);
    let table = LineOffsetTable::build(source);
    assert_eq!(table.span_start(source, err.span().unwrap()), (2, 6));
}

#[test]
fn parse_errors_have_positions() {
    let source = "vstack do\n  text(\"a\" \"b\")\nend";
    let err = Interpreter::default().parse_source(source).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1001);
    let table = LineOffsetTable::build(source);
    assert_eq!(table.span_start(source, err.span().unwrap()), (2, 12));
}

#[test]
fn rendered_diagnostics_mention_code_and_source() {
    let source = "text(\"a\").sparkle";
    let err = Interpreter::builder()
        .denylist_only(true)
        .build()
        .interpret(source, &StandardContext)
        .unwrap_err();
    let rendered = weft_diagnostic::emitter::render(&err.to_diagnostic(), source, false);
    assert!(rendered.contains("E3001"), "{rendered}");
    assert!(rendered.contains("sparkle"), "{rendered}");
}
