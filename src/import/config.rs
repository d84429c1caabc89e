//! Configuration for model import

use serde::{Deserialize, Serialize};

/// Configuration for model import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportConfig {
    /// Decode every content entry up front and report the ones that fail
    pub resolve_contents: bool,

    /// Stop at the first malformed interface instead of skipping it
    pub fail_fast: bool,

    /// Warn about names used more than once in the same scope
    pub check_duplicate_names: bool,

    /// Warn about identifiers that are not valid DTMIs
    pub check_identifiers: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            resolve_contents: false,
            fail_fast: false,
            check_duplicate_names: true,
            check_identifiers: true,
        }
    }
}

impl ImportConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ImportConfigBuilder {
        ImportConfigBuilder::default()
    }

    /// Whether any validation pass is enabled
    pub fn validates(&self) -> bool {
        self.check_duplicate_names || self.check_identifiers
    }
}

/// Builder for ImportConfig
#[derive(Debug, Default)]
pub struct ImportConfigBuilder {
    config: ImportConfig,
}

impl ImportConfigBuilder {
    /// Enable or disable eager content decoding
    pub fn resolve_contents(mut self, resolve: bool) -> Self {
        self.config.resolve_contents = resolve;
        self
    }

    /// Enable or disable fail-fast mode
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.config.fail_fast = fail_fast;
        self
    }

    /// Enable or disable the duplicate name check
    pub fn check_duplicate_names(mut self, check: bool) -> Self {
        self.config.check_duplicate_names = check;
        self
    }

    /// Enable or disable the DTMI syntax check
    pub fn check_identifiers(mut self, check: bool) -> Self {
        self.config.check_identifiers = check;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ImportConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ImportConfig::default();
        assert!(!config.resolve_contents);
        assert!(!config.fail_fast);
        assert!(config.validates());
    }

    #[test]
    fn test_builder() {
        let config = ImportConfig::builder()
            .resolve_contents(true)
            .fail_fast(true)
            .check_duplicate_names(false)
            .check_identifiers(false)
            .build();

        assert!(config.resolve_contents);
        assert!(config.fail_fast);
        assert!(!config.validates());
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: ImportConfig = serde_json::from_str(r#"{"failFast": true}"#).unwrap();
        assert!(config.fail_fast);
        assert!(config.check_identifiers);
    }
}
