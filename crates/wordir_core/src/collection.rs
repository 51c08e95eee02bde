//! Per-scan record of the last directive value seen for each tag family.

use crate::TagTable;

/// Outcome of feeding one word's content into a [`Collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// The content belongs to no family.
    Ineligible,
    /// The content is now the last-seen value of its family.
    Recorded { family: usize },
    /// The content repeats the last-seen value of its family.
    Duplicate { family: usize },
}

/// Scratch state for one left-to-right scan of one sibling chain.
///
/// The last-seen value of a family survives any number of unrelated words
/// in between: `\fs20 text \fs20` reports the second `\fs20` as a duplicate.
pub struct Collection<'t, 'a> {
    table: &'t TagTable,
    last_seen: Vec<Option<&'a str>>,
}

impl<'t, 'a> Collection<'t, 'a> {
    pub fn new(table: &'t TagTable) -> Self {
        Self {
            table,
            last_seen: vec![None; table.len()],
        }
    }

    /// Classifies `content` and records it unless it is a duplicate.
    pub fn observe(&mut self, content: &'a str) -> Observation {
        let Some(family) = self.table.family_of(content) else {
            return Observation::Ineligible;
        };

        if self.last_seen[family] == Some(content) {
            return Observation::Duplicate { family };
        }

        self.last_seen[family] = Some(content);
        Observation::Recorded { family }
    }

    /// Last value recorded for `family`.
    pub fn get(&self, family: usize) -> Option<&'a str> {
        self.last_seen.get(family).copied().flatten()
    }
}
