//! Arena storage for word content.
//!
//! Uses `bumpalo` for bump allocation of interned strings.
//! Every distinct content value of a document is copied into the same
//! arena once, and freed together when the arena is dropped.

use bumpalo::Bump;

/// Arena allocator backing the [`Interner`](crate::Interner).
///
/// Words never own their content bytes; they borrow from this arena for
/// its whole lifetime.
///
/// # Example
///
/// ```rust
/// use wordir_ast::AstArena;
///
/// let arena = AstArena::new();
/// let s = arena.alloc_str("\\fs20");
/// assert_eq!(s, "\\fs20");
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates a new arena with the specified initial capacity in bytes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_alloc_str() {
        let arena = AstArena::new();
        let s = arena.alloc_str("hello world");
        assert_eq!(s, "hello world");
    }

    #[test]
    fn test_arena_alloc_str_is_a_copy() {
        let arena = AstArena::new();
        let source = String::from("\\b");
        let stored = arena.alloc_str(&source);
        drop(source);
        assert_eq!(stored, "\\b");
    }

    #[test]
    fn test_arena_with_capacity() {
        let arena = AstArena::with_capacity(1024);
        let _ = arena.alloc_str("x");
        assert!(arena.allocated_bytes() > 0);
    }
}
