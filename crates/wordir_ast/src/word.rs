//! Word definition.
//!
//! The core IR node: literal text, a single formatting directive, or a
//! group of nested words.

use std::fmt;
use std::ops::ControlFlow;

use serde::Serialize;

use crate::Interner;
use crate::visitor::{VisitResult, Visitor, walk_chain};

/// A node in the word tree.
///
/// A `Word` is at the same time an element of a singly linked sibling chain
/// (`next`) and the parent of a nested group (`child`). Both links are owned:
/// dropping a word drops its group and every word after it in the chain.
///
/// Content is borrowed from the [`AstArena`](crate::AstArena) through the
/// [`Interner`], so the `'a` lifetime ties a tree to its arena.
///
/// A word is expected to carry content, a child, or both. A word with
/// neither is tolerated and reported by diagnostics consumers.
///
/// # Example
///
/// ```rust
/// use wordir_ast::{AstArena, Interner, Word};
///
/// let arena = AstArena::new();
/// let mut interner = Interner::new(&arena);
///
/// // {\b bold} plain
/// let bold = Word::group([
///     Word::new(&mut interner, Some("\\b")),
///     Word::new(&mut interner, Some("bold")),
/// ]);
/// let head = Word::chain([bold, Word::new(&mut interner, Some("plain"))]);
///
/// assert_eq!(head.map(|w| w.count()), Some(4));
/// ```
#[derive(Default)]
pub struct Word<'a> {
    /// Interned content, if any.
    pub content: Option<&'a str>,

    /// The following sibling at the same nesting level.
    pub next: Option<Box<Word<'a>>>,

    /// The first word of the nested group.
    pub child: Option<Box<Word<'a>>>,
}

impl<'a> Word<'a> {
    /// Creates a word, binding `content` through the interner.
    ///
    /// Without content the word starts as a pure group container.
    pub fn new(interner: &mut Interner<'a>, content: Option<&str>) -> Self {
        Self::from_interned(content.map(|raw| interner.intern(raw)))
    }

    /// Creates a word from an already interned reference.
    #[inline]
    pub const fn from_interned(content: Option<&'a str>) -> Self {
        Self {
            content,
            next: None,
            child: None,
        }
    }

    /// Creates a content-less group holding `children` in order.
    pub fn group(children: impl IntoIterator<Item = Word<'a>>) -> Self {
        Self {
            content: None,
            next: None,
            child: Self::chain(children),
        }
    }

    /// Links `words` into a sibling chain and returns its head.
    ///
    /// Any `next` link already present on the given words is replaced.
    pub fn chain(words: impl IntoIterator<Item = Word<'a>>) -> Option<Box<Word<'a>>> {
        let words: Vec<Word<'a>> = words.into_iter().collect();
        let mut head = None;
        for mut word in words.into_iter().rev() {
            word.next = head;
            head = Some(Box::new(word));
        }
        head
    }

    /// Sets the following sibling.
    #[must_use]
    pub fn with_next(mut self, next: Word<'a>) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    /// Sets the nested group.
    #[must_use]
    pub fn with_child(mut self, child: Word<'a>) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// Returns the content reference. No copy is made.
    #[inline]
    pub const fn string(&self) -> Option<&'a str> {
        self.content
    }

    #[inline]
    pub const fn has_child(&self) -> bool {
        self.child.is_some()
    }

    /// Returns true if this word has neither content nor a child.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.content.is_none() && self.child.is_none()
    }

    /// Iterates over this word and the words following it.
    pub fn siblings(&self) -> Siblings<'_, 'a> {
        Siblings {
            current: Some(self),
        }
    }

    /// Number of words reachable from this one, siblings and groups included.
    pub fn count(&self) -> usize {
        let mut counter = WordCounter::default();
        let _ = walk_chain(&mut counter, self, 0);
        counter.words
    }

    /// Destroys this word, its group, and the rest of its sibling chain.
    ///
    /// Groups are torn down recursively, the sibling chain in a loop.
    /// Returns the number of words destroyed.
    pub fn free(mut self) -> usize {
        let mut next = self.next.take();
        let mut freed = Self::free_single(self);
        while let Some(mut word) = next {
            next = word.next.take();
            freed += Self::free_single(*word);
        }
        freed
    }

    /// Frees a word whose `next` link has already been detached.
    fn free_single(mut word: Word<'a>) -> usize {
        let group = word.child.take().map_or(0, |child| (*child).free());
        group + 1
    }

    /// Wraps this word so that it serializes as its whole sibling chain.
    pub fn as_chain(&self) -> Chain<'_, 'a> {
        Chain(self)
    }
}

impl Drop for Word<'_> {
    fn drop(&mut self) {
        // Unlink siblings one at a time so a long chain does not recurse.
        let mut next = self.next.take();
        while let Some(mut word) = next {
            next = word.next.take();
        }
    }
}

impl PartialEq for Word<'_> {
    /// Compares two sibling chains word by word. Only groups recurse.
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.siblings();
        let mut right = other.siblings();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a.content == b.content && a.child == b.child => {}
                _ => return false,
            }
        }
    }
}

impl Eq for Word<'_> {}

impl fmt::Debug for Word<'_> {
    /// Formats the sibling chain starting here as a list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.siblings().map(DebugEntry))
            .finish()
    }
}

struct DebugEntry<'w, 'a>(&'w Word<'a>);

impl fmt::Debug for DebugEntry<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Word")
            .field("content", &self.0.content)
            .field("child", &self.0.child)
            .finish()
    }
}

impl<'a> Serialize for Word<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let len = usize::from(self.content.is_some()) + usize::from(self.child.is_some());
        let mut state = serializer.serialize_struct("Word", len)?;

        if let Some(content) = self.content {
            state.serialize_field("content", content)?;
        } else {
            state.skip_field("content")?;
        }

        if let Some(child) = self.child.as_deref() {
            state.serialize_field("children", &child.as_chain())?;
        } else {
            state.skip_field("children")?;
        }

        state.end()
    }
}

/// A sibling chain, serialized as a sequence of words.
#[derive(Debug, Clone, Copy)]
pub struct Chain<'w, 'a>(pub &'w Word<'a>);

impl Serialize for Chain<'_, '_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.0.siblings())
    }
}

/// Iterator over a sibling chain.
#[derive(Debug, Clone)]
pub struct Siblings<'w, 'a> {
    current: Option<&'w Word<'a>>,
}

impl<'w, 'a> Iterator for Siblings<'w, 'a> {
    type Item = &'w Word<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let word = self.current?;
        self.current = word.next.as_deref();
        Some(word)
    }
}

#[derive(Default)]
struct WordCounter {
    words: usize,
}

impl<'a> Visitor<'a> for WordCounter {
    fn visit_word(&mut self, _word: &Word<'a>, _depth: usize) -> VisitResult {
        self.words += 1;
        ControlFlow::Continue(())
    }
}
