//! Weft executor.
//!
//! Walks a parsed, policy-checked AST and invokes handlers from a
//! [`CapabilityContext`]. Programs can only reach what the context's
//! [`CapabilityTable`] names, and every handler returns the same closed
//! [`Value`] type, so a chain of calls never leaves the table.
//!
//! # Dispatch
//!
//! - `name(...)` with no receiver runs the operation `name`
//! - `node.name(...)` runs the modifier `name` on the node
//! - `fragment.name(...)` runs the modifier on every node of the fragment
//!
//! Anything else is an [`ExecutionError`]. Errors abort the whole run.

mod context;
pub mod errors;
mod executor;
mod invocation;
mod render_node;
mod scope;
#[cfg(feature = "serde")]
mod serialize;
mod value;

pub use context::{CapabilityContext, CapabilityTable, ModifierFn, OperationFn};
pub use errors::{EvalResult, ExecutionError, ExecutionErrorKind};
pub use executor::Executor;
pub use invocation::Invocation;
pub use render_node::{RenderNode, FRAGMENT_TAG, TEXT_TAG};
pub use scope::Scope;
pub use value::Value;

use weft_ir::Node;

/// Execute `node` against `ctx`.
pub fn execute<C: CapabilityContext>(node: &Node, ctx: &C) -> EvalResult {
    Executor::new(ctx).execute(node)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
