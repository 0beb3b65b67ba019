//! Stack growth for recursive descent and tree walking.
//!
//! The parser and the executor recurse once per nesting level. The
//! configured depth limits keep that bounded, but a host may raise them, so
//! both phases wrap their recursive entry points in
//! [`ensure_sufficient_stack`] and grow the stack instead of overflowing.
//! The recursive trait impls on the syntax and output trees (clone,
//! equality, debug, serialization, call walking) do the same; dropping
//! those trees uses a worklist instead.
//!
//! On wasm32 this is a passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
const GROW_BY: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROW_BY, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
