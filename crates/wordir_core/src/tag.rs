//! Eligibility table for directive deduplication.
//!
//! Each [`TagFamily`] names one directive pattern whose repeats can be dropped
//! without changing rendered output. The [`TagTable`] is ordered: the first
//! family that matches a word's content wins.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One deduplicable directive pattern.
///
/// Either an exact literal (`has_param == false`) or a literal prefix that
/// must be followed by a numeric parameter, e.g. `\fs` matching `\fs20` and
/// `\fs-4`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagFamily {
    /// Literal text, or the prefix before the numeric parameter.
    pub name: String,

    /// Whether a numeric parameter follows `name`.
    #[serde(default)]
    pub has_param: bool,
}

impl TagFamily {
    /// Creates a family matching `name` exactly.
    pub fn literal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_param: false,
        }
    }

    /// Creates a family matching `name` followed by a numeric parameter.
    pub fn with_param(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_param: true,
        }
    }

    /// Returns true if `content` belongs to this family.
    ///
    /// For parameterised families only the byte right after the prefix is
    /// checked: it must be an ASCII digit or `-`.
    pub fn matches(&self, content: &str) -> bool {
        if !self.has_param {
            return content == self.name;
        }

        content
            .strip_prefix(self.name.as_str())
            .and_then(|rest| rest.bytes().next())
            .is_some_and(|b| b.is_ascii_digit() || b == b'-')
    }
}

/// Ordered list of [`TagFamily`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTable {
    families: Vec<TagFamily>,
}

impl TagTable {
    /// Builds a table, rejecting families that could never match.
    pub fn new(families: Vec<TagFamily>) -> Result<Self, ConfigError> {
        if let Some(index) = families.iter().position(|f| f.name.is_empty()) {
            return Err(ConfigError::invalid_family(index, "name must not be empty"));
        }
        Ok(Self { families })
    }

    /// Returns the index of the first family matching `content`.
    pub fn family_of(&self, content: &str) -> Option<usize> {
        self.families.iter().position(|family| family.matches(content))
    }

    pub fn families(&self) -> &[TagFamily] {
        &self.families
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl Default for TagTable {
    /// Font size (`\fsN`) and font selection (`\fN`).
    fn default() -> Self {
        Self {
            families: default_families(),
        }
    }
}

pub(crate) fn default_families() -> Vec<TagFamily> {
    vec![TagFamily::with_param("\\fs"), TagFamily::with_param("\\f")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::font_size("\\fs20", Some(0))]
    #[case::negative_param("\\fs-2", Some(0))]
    #[case::font("\\f1", Some(1))]
    #[case::font_negative("\\f-1", Some(1))]
    #[case::bare_prefix("\\fs", None)]
    #[case::bare_font("\\f", None)]
    #[case::other_directive("\\fi-360", None)]
    #[case::bold("\\b", None)]
    #[case::text("fs20", None)]
    #[case::empty("", None)]
    fn test_default_table_family_of(#[case] content: &str, #[case] expected: Option<usize>) {
        let table = TagTable::default();
        assert_eq!(table.family_of(content), expected);
    }

    #[test]
    fn test_literal_family_matches_exactly() {
        let family = TagFamily::literal("\\b");

        assert!(family.matches("\\b"));
        assert!(!family.matches("\\b0"));
        assert!(!family.matches("\\bullet"));
    }

    #[test]
    fn test_param_family_checks_first_byte_only() {
        let family = TagFamily::with_param("\\cf");

        assert!(family.matches("\\cf2"));
        assert!(family.matches("\\cf2x"));
        assert!(!family.matches("\\cfx2"));
    }

    #[test]
    fn test_first_match_wins() {
        let table = TagTable::new(vec![
            TagFamily::with_param("\\f"),
            TagFamily::with_param("\\fs"),
        ])
        .unwrap();

        // "\fs20" does not match "\f" because 's' is not a parameter.
        assert_eq!(table.family_of("\\fs20"), Some(1));
        assert_eq!(table.family_of("\\f2"), Some(0));
    }

    #[test]
    fn test_default_table_families() {
        let table = TagTable::default();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.families(),
            &[TagFamily::with_param("\\fs"), TagFamily::with_param("\\f")]
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = TagTable::new(vec![TagFamily::literal("\\b"), TagFamily::literal("")])
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidFamily { index: 1, .. }));
    }

    #[test]
    fn test_empty_table_matches_nothing() {
        let table = TagTable::new(Vec::new()).unwrap();

        assert!(table.is_empty());
        assert_eq!(table.family_of("\\fs20"), None);
    }
}
