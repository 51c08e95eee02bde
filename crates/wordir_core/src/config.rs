//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;
use crate::tag::{TagFamily, TagTable, default_families};

/// Default ceiling on group nesting handled by the optimizer.
pub const DEFAULT_MAX_GROUP_DEPTH: usize = 1000;

/// Configuration for the [`Optimizer`](crate::Optimizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptimizerConfig {
    /// Deepest group level that is still optimized. Deeper branches are
    /// left untouched and reported.
    pub max_group_depth: usize,

    /// Deduplicable directive families, in match priority order.
    pub families: Vec<TagFamily>,
}

impl OptimizerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            max_group_depth: DEFAULT_MAX_GROUP_DEPTH,
            families: default_families(),
        }
    }

    /// Parses configuration from a JSON string.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigError::invalid(format!("Invalid JSON: {}", e)))?;
        config.tag_table()?;
        Ok(config)
    }

    /// Builds the validated eligibility table.
    pub fn tag_table(&self) -> Result<TagTable, ConfigError> {
        TagTable::new(self.families.clone())
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_config_default() {
        let config = OptimizerConfig::default();

        assert_eq!(config.max_group_depth, 1000);
        assert_eq!(
            config.families,
            vec![TagFamily::with_param("\\fs"), TagFamily::with_param("\\f")]
        );
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "max_group_depth": 16,
            "families": [
                { "name": "\\fs", "has_param": true },
                { "name": "\\plain" }
            ]
        }"#;

        let config = OptimizerConfig::from_json(json).unwrap();

        assert_eq!(config.max_group_depth, 16);
        assert_eq!(config.families[1], TagFamily::literal("\\plain"));
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config = OptimizerConfig::from_json(r#"{ "max_group_depth": 3 }"#).unwrap();

        assert_eq!(config.max_group_depth, 3);
        assert_eq!(config.families, OptimizerConfig::new().families);
    }

    #[test]
    fn test_config_round_trip() {
        let config = OptimizerConfig::new();
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(OptimizerConfig::from_json(&json).unwrap(), config);
    }

    #[rstest]
    #[case::unknown_property(r#"{ "max_depth": 3 }"#, "Invalid config")]
    #[case::type_mismatch(r#"{ "max_group_depth": "deep" }"#, "Invalid config")]
    #[case::negative_depth(r#"{ "max_group_depth": -1 }"#, "Invalid config")]
    #[case::unknown_family_field(
        r#"{ "families": [{ "name": "\\b", "param": true }] }"#,
        "Invalid config"
    )]
    #[case::empty_family_name(r#"{ "families": [{ "name": "" }] }"#, "Invalid tag family")]
    fn test_config_errors(#[case] json: &str, #[case] expected_error_part: &str) {
        let result = OptimizerConfig::from_json(json);
        assert!(result.is_err(), "Expected error for JSON: {}", json);
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains(expected_error_part),
            "Error message '{}' should contain '{}'",
            err,
            expected_error_part
        );
    }
}
