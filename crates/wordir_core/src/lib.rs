//! # wordir_core
//!
//! Structural optimization and diagnostics for the `wordir_ast` word tree.
//!
//! This crate provides:
//! - The [`Optimizer`], which drops formatting directives that repeat the
//!   value already in effect within the same group
//! - The eligibility table ([`TagTable`], [`TagFamily`]) deciding which
//!   directives may be dropped
//! - [`dump`], an indented diagnostic printer
//! - [`Diagnostics`] collecting non-fatal [`Warning`]s
//!
//! ## Example
//!
//! ```rust
//! use wordir_ast::{AstArena, Interner, Word};
//! use wordir_core::{Diagnostics, Optimizer, OptimizerConfig, dump};
//!
//! let arena = AstArena::new();
//! let mut interner = Interner::new(&arena);
//! let head = Word::chain([
//!     Word::new(&mut interner, Some("\\f1")),
//!     Word::new(&mut interner, Some("\\f1")),
//!     Word::new(&mut interner, Some("text")),
//! ])
//! .unwrap();
//!
//! let config = OptimizerConfig::from_json(r#"{ "max_group_depth": 64 }"#)?;
//! let optimizer = Optimizer::new(&config)?;
//! let mut diagnostics = Diagnostics::new();
//!
//! let head = optimizer.optimize(head, &mut diagnostics);
//! assert_eq!(dump(&head, &mut diagnostics), "\n. \"\\f1\" \"text\" ");
//! # Ok::<(), wordir_core::ConfigError>(())
//! ```

mod collection;
mod config;
mod diagnostics;
mod dump;
mod error;
mod optimizer;
mod tag;

pub use collection::{Collection, Observation};
pub use config::{DEFAULT_MAX_GROUP_DEPTH, OptimizerConfig};
pub use diagnostics::{Diagnostics, Warning};
pub use dump::dump;
pub use error::ConfigError;
pub use optimizer::{Optimizer, ROOT_DEPTH};
pub use tag::{TagFamily, TagTable};
