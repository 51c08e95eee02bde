//! Walk functions for word tree traversal.

use std::ops::ControlFlow;

use crate::Word;

use super::{VisitResult, Visitor};

/// Walks the sibling chain starting at `head`, descending into every group.
///
/// Siblings are visited in a loop; only groups recurse, at `depth + 1`,
/// bracketed by [`Visitor::enter_group`] and [`Visitor::exit_group`].
///
/// # Returns
///
/// `ControlFlow::Break(())` as soon as the visitor asks to stop.
pub fn walk_chain<'a, V>(visitor: &mut V, head: &Word<'a>, depth: usize) -> VisitResult
where
    V: Visitor<'a>,
{
    for word in head.siblings() {
        visitor.visit_word(word, depth)?;

        if let Some(child) = word.child.as_deref() {
            visitor.enter_group(depth + 1)?;
            walk_chain(visitor, child, depth + 1)?;
            visitor.exit_group(depth + 1)?;
        }
    }

    ControlFlow::Continue(())
}
