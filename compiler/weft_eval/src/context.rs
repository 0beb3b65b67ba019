//! Capability contexts.
//!
//! A context is the only thing a program can reach. Its capability table
//! maps names to plain function pointers, built once per context type;
//! there is no dynamic lookup beyond that map.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{EvalResult, Invocation, RenderNode};

/// Handler for a top-level call, e.g. `text("Hi")`.
pub type OperationFn<C> = fn(&C, Invocation) -> EvalResult;

/// Handler for a chained call on a node, e.g. `.padding(4)`.
pub type ModifierFn<C> = fn(&C, RenderNode, Invocation) -> EvalResult;

/// A host-provided set of operations and modifiers.
pub trait CapabilityContext: Sized {
    fn capabilities(&self) -> &CapabilityTable<Self>;
}

/// Name → handler maps for one context type.
pub struct CapabilityTable<C> {
    operations: FxHashMap<&'static str, OperationFn<C>>,
    modifiers: FxHashMap<&'static str, ModifierFn<C>>,
}

impl<C> CapabilityTable<C> {
    pub fn new() -> Self {
        CapabilityTable {
            operations: FxHashMap::default(),
            modifiers: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_operation(mut self, name: &'static str, op: OperationFn<C>) -> Self {
        self.operations.insert(name, op);
        self
    }

    #[must_use]
    pub fn with_modifier(mut self, name: &'static str, modifier: ModifierFn<C>) -> Self {
        self.modifiers.insert(name, modifier);
        self
    }

    pub fn operation(&self, name: &str) -> Option<OperationFn<C>> {
        self.operations.get(name).copied()
    }

    pub fn modifier(&self, name: &str) -> Option<ModifierFn<C>> {
        self.modifiers.get(name).copied()
    }

    pub fn has_operation(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    pub fn has_modifier(&self, name: &str) -> bool {
        self.modifiers.contains_key(name)
    }

    /// Every callable name, sorted. Suitable as a parser allowlist.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .operations
            .keys()
            .chain(self.modifiers.keys())
            .copied()
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl<C> Default for CapabilityTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for CapabilityTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut operations: Vec<_> = self.operations.keys().collect();
        let mut modifiers: Vec<_> = self.modifiers.keys().collect();
        operations.sort_unstable();
        modifiers.sort_unstable();
        f.debug_struct("CapabilityTable")
            .field("operations", &operations)
            .field("modifiers", &modifiers)
            .finish()
    }
}
