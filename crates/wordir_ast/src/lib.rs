//! # wordir_ast
//!
//! Word tree IR for parsed RTF document content.
//!
//! A parsed document is a tree of [`Word`]s: each word is literal text, one
//! formatting directive such as `\fs20`, or a group (`{...}`) of nested
//! words. Words form a sibling chain through `next` and nest through `child`.
//!
//! ## Architecture
//!
//! - Word content is interned: equal strings share one copy in an
//!   [`AstArena`] (`bumpalo`), handed out by the [`Interner`]
//! - Words own their group and the rest of their sibling chain
//! - Teardown walks sibling chains in a loop, so flat documents with very
//!   long runs of words never grow the call stack
//!
//! ## Example
//!
//! ```rust
//! use wordir_ast::{AstArena, Interner, Word};
//!
//! let arena = AstArena::new();
//! let mut interner = Interner::new(&arena);
//!
//! let word = Word::new(&mut interner, Some("\\fs20"));
//! assert_eq!(word.string(), Some("\\fs20"));
//! ```

mod arena;
mod interner;
pub mod visitor;
mod word;

pub use arena::AstArena;
pub use interner::Interner;
pub use word::{Chain, Siblings, Word};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor, walk_chain};
