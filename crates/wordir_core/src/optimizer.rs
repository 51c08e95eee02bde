//! Redundant directive removal.
//!
//! Within one sibling chain, a directive that repeats the value last seen
//! for its [`TagFamily`](crate::TagFamily) changes nothing in the rendered
//! output and is dropped. Each group is scanned on its own: what was seen
//! outside a group never makes a word inside it redundant, and vice versa.

use tracing::{debug, trace};
use wordir_ast::Word;

use crate::collection::{Collection, Observation};
use crate::{ConfigError, Diagnostics, OptimizerConfig, TagTable, Warning};

/// Depth of the top-level sibling chain.
pub const ROOT_DEPTH: usize = 1;

/// Removes duplicated formatting directives from a word tree in place.
///
/// # Example
///
/// ```rust
/// use wordir_ast::{AstArena, Interner, Word};
/// use wordir_core::{Diagnostics, Optimizer, OptimizerConfig};
///
/// let arena = AstArena::new();
/// let mut interner = Interner::new(&arena);
/// let head = Word::chain([
///     Word::new(&mut interner, Some("\\fs20")),
///     Word::new(&mut interner, Some("text")),
///     Word::new(&mut interner, Some("\\fs20")),
/// ])
/// .unwrap();
///
/// let optimizer = Optimizer::new(&OptimizerConfig::default()).unwrap();
/// let mut diagnostics = Diagnostics::new();
/// let head = optimizer.optimize(head, &mut diagnostics);
///
/// assert_eq!(head.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer {
    table: TagTable,
    max_group_depth: usize,
}

impl Optimizer {
    /// Creates an optimizer from configuration.
    pub fn new(config: &OptimizerConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_table(config.tag_table()?, config.max_group_depth))
    }

    /// Creates an optimizer from an already validated table.
    pub fn with_table(table: TagTable, max_group_depth: usize) -> Self {
        Self {
            table,
            max_group_depth,
        }
    }

    pub fn max_group_depth(&self) -> usize {
        self.max_group_depth
    }

    pub fn table(&self) -> &TagTable {
        &self.table
    }

    /// Optimizes a whole tree given its top-level chain.
    ///
    /// Returns the head of the optimized chain.
    pub fn optimize<'a>(
        &self,
        head: Box<Word<'a>>,
        diagnostics: &mut Diagnostics,
    ) -> Box<Word<'a>> {
        let removed_before = diagnostics.removed_words();
        let head = self.optimize_at(head, ROOT_DEPTH, diagnostics);
        debug!(
            "Optimized word tree: {} words removed",
            diagnostics.removed_words() - removed_before
        );
        head
    }

    /// Optimizes the chain starting at `head`, taken to sit at `depth`.
    ///
    /// The first word of a chain has nothing before it and is never removed,
    /// so the returned head is the one passed in.
    pub fn optimize_at<'a>(
        &self,
        mut head: Box<Word<'a>>,
        depth: usize,
        diagnostics: &mut Diagnostics,
    ) -> Box<Word<'a>> {
        self.optimize_chain(&mut head, depth, diagnostics);
        head
    }

    fn optimize_chain<'a>(&self, head: &mut Word<'a>, depth: usize, diagnostics: &mut Diagnostics) {
        if depth > self.max_group_depth {
            diagnostics.warn(Warning::MaxDepthReached {
                depth,
                limit: self.max_group_depth,
            });
            return;
        }

        let mut collection = Collection::new(&self.table);

        if let Some(content) = head.content {
            collection.observe(content);
        }
        self.optimize_group(head, depth, diagnostics);

        let mut prev: &mut Word<'a> = head;
        while let Some(mut current) = prev.next.take() {
            let observation = current
                .content
                .map_or(Observation::Ineligible, |content| collection.observe(content));

            if let Observation::Duplicate { family } = observation {
                trace!(
                    "Removing {:?} (family {}) at depth {}",
                    current.content, family, depth
                );
                prev.next = current.next.take();
                diagnostics.record_removed((*current).free());
                continue;
            }

            self.optimize_group(&mut current, depth, diagnostics);
            prev = &mut **prev.next.insert(current);
        }
    }

    fn optimize_group<'a>(&self, word: &mut Word<'a>, depth: usize, diagnostics: &mut Diagnostics) {
        if let Some(child) = word.child.as_deref_mut() {
            self.optimize_chain(child, depth + 1, diagnostics);
        }
    }
}
