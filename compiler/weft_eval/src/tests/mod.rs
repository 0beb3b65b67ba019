//! Executor tests against a recording context.
//!
//! - `executor`: dispatch, evaluation order, block aggregation, errors
//! - `serialize`: JSON shape of execution output (`serde` feature)

#[cfg(feature = "serde")]
mod serialize;

use std::cell::RefCell;

use weft_ir::Node;
use weft_parse::ParseOptions;
use weft_policy::SecurityPolicy;

use crate::errors::invalid_value;
use crate::{CapabilityContext, CapabilityTable, EvalResult, Invocation, RenderNode, Value};

/// Records every handler call as `name` or `name:detail`.
struct Recorder {
    table: CapabilityTable<Recorder>,
    calls: RefCell<Vec<String>>,
}

impl Recorder {
    fn new() -> Self {
        let table = CapabilityTable::new()
            .with_operation("text", op_text)
            .with_operation("box", op_box)
            .with_operation("pair", op_pair)
            .with_operation("echo", op_echo)
            .with_operation("nothing", op_nothing)
            .with_modifier("padding", mod_padding)
            .with_modifier("tag", mod_tag);
        Recorder {
            table,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn record(&self, entry: impl Into<String>) {
        self.calls.borrow_mut().push(entry.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CapabilityContext for Recorder {
    fn capabilities(&self) -> &CapabilityTable<Self> {
        &self.table
    }
}

fn op_text(ctx: &Recorder, inv: Invocation) -> EvalResult {
    inv.reject_block()?;
    inv.expect_max_positional(1)?;
    inv.expect_named_only(&[])?;
    let content = inv.positional_text(0)?;
    ctx.record(format!("text:{content}"));
    Ok(RenderNode::new("span").with_text(content).into())
}

fn op_box(ctx: &Recorder, mut inv: Invocation) -> EvalResult {
    inv.expect_named_only(&["spacing"])?;
    ctx.record("box");
    let mut node = RenderNode::new("div");
    if let Some(spacing) = inv.named_keyword("spacing")? {
        node.add_class(&format!("gap-{spacing}"));
    }
    let leading: Vec<RenderNode> = std::mem::take(&mut inv.positional)
        .into_iter()
        .flat_map(Value::into_nodes)
        .collect();
    Ok(node
        .with_children(leading)
        .with_children(inv.take_children())
        .into())
}

fn op_pair(ctx: &Recorder, inv: Invocation) -> EvalResult {
    inv.reject_block()?;
    ctx.record("pair");
    Ok(Value::Fragment(vec![
        RenderNode::new("span").with_text("1"),
        RenderNode::new("span").with_text("2"),
    ]))
}

fn op_echo(ctx: &Recorder, inv: Invocation) -> EvalResult {
    inv.expect_positional(1)?;
    ctx.record("echo");
    Ok(inv.positional[0].clone())
}

fn op_nothing(ctx: &Recorder, _inv: Invocation) -> EvalResult {
    ctx.record("nothing");
    Ok(Value::Nil)
}

fn mod_padding(ctx: &Recorder, mut node: RenderNode, inv: Invocation) -> EvalResult {
    inv.reject_block()?;
    inv.expect_positional(1)?;
    let scale = inv.positional_keyword(0)?;
    if scale.starts_with('-') {
        return Err(invalid_value("padding", "argument 1", "must not be negative"));
    }
    ctx.record(format!("padding:{scale}"));
    node.add_class(&format!("p-{scale}"));
    Ok(node.into())
}

fn mod_tag(ctx: &Recorder, node: RenderNode, inv: Invocation) -> EvalResult {
    let name = inv.positional_symbol_or_str(0)?;
    ctx.record(format!("tag:{name}"));
    Ok(node.with_attr("data-tag", name).into())
}

fn parse(source: &str) -> Node {
    let tokens = weft_lexer::tokenize(source).unwrap();
    weft_parse::parse(&tokens, &SecurityPolicy::denylist_only(), &ParseOptions::default())
        .unwrap_or_else(|err| panic!("failed to parse {source:?}: {err}"))
}

fn run(source: &str) -> (EvalResult, Vec<String>) {
    let ctx = Recorder::new();
    let result = crate::execute(&parse(source), &ctx);
    (result, ctx.calls())
}

fn run_ok(source: &str) -> Value {
    match run(source).0 {
        Ok(value) => value,
        Err(err) => panic!("failed to execute {source:?}: {err}"),
    }
}
