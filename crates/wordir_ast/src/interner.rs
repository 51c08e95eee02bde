//! String interning for word content.
//!
//! Equal content values share one stored copy in the [`AstArena`], so a
//! document with thousands of `\par` words keeps a single `"\\par"`.

use std::collections::HashSet;

use crate::AstArena;

/// Deduplicating string table on top of an [`AstArena`].
///
/// References handed out by [`Interner::intern`] are valid for the arena's
/// lifetime `'a`, compare by value like any `&str`, and are pointer-equal
/// for equal inputs.
///
/// # Example
///
/// ```rust
/// use wordir_ast::{AstArena, Interner};
///
/// let arena = AstArena::new();
/// let mut interner = Interner::new(&arena);
///
/// let a = interner.intern("\\fs20");
/// let b = interner.intern("\\fs20");
/// assert!(std::ptr::eq(a, b));
/// ```
pub struct Interner<'a> {
    arena: &'a AstArena,
    table: HashSet<&'a str>,
}

impl<'a> Interner<'a> {
    /// Creates an empty interner storing into `arena`.
    pub fn new(arena: &'a AstArena) -> Self {
        Self {
            arena,
            table: HashSet::new(),
        }
    }

    /// Returns the stable reference for `raw`, storing it on first sight.
    pub fn intern(&mut self, raw: &str) -> &'a str {
        if let Some(&stored) = self.table.get(raw) {
            return stored;
        }

        let arena: &'a AstArena = self.arena;
        let stored = arena.alloc_str(raw);
        self.table.insert(stored);
        stored
    }

    /// Returns true if `raw` has already been interned.
    pub fn contains(&self, raw: &str) -> bool {
        self.table.contains(raw)
    }

    /// Number of distinct strings stored.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
