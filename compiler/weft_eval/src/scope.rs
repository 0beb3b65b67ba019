//! Block scopes.
//!
//! Each block body runs in a child scope that knows the operation owning
//! it. Scopes live on the Rust stack and are only used to annotate errors.

/// Lexical position of the block being executed.
#[derive(Clone, Copy, Debug)]
pub struct Scope<'p> {
    owner: Option<&'p str>,
    parent: Option<&'p Scope<'p>>,
    depth: usize,
}

impl<'p> Scope<'p> {
    pub fn root() -> Self {
        Scope {
            owner: None,
            parent: None,
            depth: 0,
        }
    }

    /// Scope for the block of `owner`.
    pub fn child(&'p self, owner: &'p str) -> Scope<'p> {
        Scope {
            owner: Some(owner),
            parent: Some(self),
            depth: self.depth + 1,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Owners from the outermost block inward, e.g. `vstack > card`.
    pub fn path(&self) -> String {
        let mut owners = Vec::with_capacity(self.depth);
        let mut current = Some(self);
        while let Some(scope) = current {
            if let Some(owner) = scope.owner {
                owners.push(owner);
            }
            current = scope.parent;
        }
        owners.reverse();
        owners.join(" > ")
    }
}
