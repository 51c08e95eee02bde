//! Visitor pattern for word tree traversal.
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`walk_chain`] - Walks a sibling chain and every nested group
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use wordir_ast::Word;
//! use wordir_ast::visitor::{VisitResult, Visitor, walk_chain};
//!
//! struct TextCollector<'a> {
//!     texts: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for TextCollector<'a> {
//!     fn visit_word(&mut self, word: &Word<'a>, _depth: usize) -> VisitResult {
//!         if let Some(text) = word.string() {
//!             self.texts.push(text);
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let head = Word::chain([
//!     Word::from_interned(Some("hello")),
//!     Word::group([Word::from_interned(Some("world"))]),
//! ])
//! .unwrap();
//!
//! let mut collector = TextCollector { texts: Vec::new() };
//! walk_chain(&mut collector, &head, 0);
//! assert_eq!(collector.texts, vec!["hello", "world"]);
//! ```

mod walk;

use std::ops::ControlFlow;

use crate::Word;

pub use walk::walk_chain;

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - keep walking
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Read-only traversal over a word tree.
///
/// `depth` is the nesting level of the visited chain, as passed to
/// [`walk_chain`] and incremented once per group.
pub trait Visitor<'a>: Sized {
    /// Called for every word, before its group is walked.
    #[inline]
    fn visit_word(&mut self, _word: &Word<'a>, _depth: usize) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called before walking a group whose words sit at `depth`.
    #[inline]
    fn enter_group(&mut self, _depth: usize) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after a group whose words sit at `depth` has been walked.
    #[inline]
    fn exit_group(&mut self, _depth: usize) -> VisitResult {
        ControlFlow::Continue(())
    }
}
