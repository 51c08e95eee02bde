//! Non-fatal diagnostics raised while optimizing or dumping a word tree.

use thiserror::Error;
use tracing::warn;

/// A structural anomaly worth reporting that does not stop processing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    /// A word carries neither content nor a group.
    #[error("Word object has no string and no children (depth {depth})")]
    EmptyWord { depth: usize },

    /// Group nesting went past the configured limit; the branch was left as is.
    #[error("Max group depth reached (depth {depth}, limit {limit})")]
    MaxDepthReached { depth: usize, limit: usize },
}

/// Collects warnings and optimization statistics for one pipeline run.
///
/// Every recorded warning is also emitted through `tracing`.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
    removed_words: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning.
    pub fn warn(&mut self, warning: Warning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Words destroyed by the optimizer so far.
    pub fn removed_words(&self) -> usize {
        self.removed_words
    }

    pub(crate) fn record_removed(&mut self, words: usize) {
        self.removed_words += words;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let diagnostics = Diagnostics::new();
        assert!(!diagnostics.has_warnings());
        assert_eq!(diagnostics.removed_words(), 0);
    }

    #[test]
    fn test_warn_records_in_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn(Warning::EmptyWord { depth: 1 });
        diagnostics.warn(Warning::MaxDepthReached {
            depth: 4,
            limit: 3,
        });

        assert_eq!(
            diagnostics.warnings(),
            &[
                Warning::EmptyWord { depth: 1 },
                Warning::MaxDepthReached { depth: 4, limit: 3 },
            ]
        );
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning::MaxDepthReached {
            depth: 1001,
            limit: 1000,
        };
        assert_eq!(
            warning.to_string(),
            "Max group depth reached (depth 1001, limit 1000)"
        );
    }
}
