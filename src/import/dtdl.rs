//! DTDL document import
//!
//! Decodes interface documents with skip-and-continue error collection:
//! a malformed interface is reported in [`ImportResult::errors`] and the
//! remaining interfaces are still returned.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{ImportConfig, ImportError, ImportResult};
use crate::codec::WireCodec;
use crate::models::Interface;
use crate::validation::ValidationReport;

/// DTDL importer
#[derive(Debug, Default)]
pub struct ModelImporter {
    pub config: ImportConfig,
}

impl ModelImporter {
    /// Create a new importer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an importer with a custom configuration
    pub fn with_config(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Import interfaces from JSON text
    ///
    /// # Arguments
    ///
    /// * `json` - A DTDL document: one interface object or an array of them
    ///
    /// # Returns
    ///
    /// The decoded interfaces with per-interface errors. Fails outright only
    /// when the text is not JSON, the top level is neither an object nor an
    /// array, or `fail_fast` is set and an interface is malformed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dtdl_sdk::import::ModelImporter;
    ///
    /// let result = ModelImporter::new()
    ///     .import_str(r#"[
    ///         {"@id": "dtmi:com:example:Room;1", "@type": "Interface"},
    ///         {"@type": "Interface"}
    ///     ]"#)
    ///     .unwrap();
    ///
    /// assert_eq!(result.interfaces.len(), 1);
    /// assert_eq!(result.errors.len(), 1);
    /// ```
    pub fn import_str(&self, json: &str) -> Result<ImportResult, ImportError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| ImportError::ParseError(e.to_string()))?;
        self.import_value(&value)
    }

    /// Import interfaces from an already parsed JSON value
    pub fn import_value(&self, value: &Value) -> Result<ImportResult, ImportError> {
        let documents: Vec<&Value> = match value {
            Value::Array(items) => items.iter().collect(),
            Value::Object(_) => vec![value],
            _ => {
                return Err(ImportError::ParseError(
                    "expected an interface object or an array of interfaces".to_string(),
                ));
            }
        };

        let mut result = ImportResult::default();
        for (index, document) in documents.into_iter().enumerate() {
            let interface = match Interface::decode(document) {
                Ok(interface) => interface,
                Err(source) => {
                    let error = ImportError::Decode { index, source };
                    if self.config.fail_fast {
                        return Err(error);
                    }
                    warn!("Skipping interface {}: {}", index, error);
                    result.errors.push(error);
                    continue;
                }
            };
            debug!(
                "Decoded {} with {} content entries",
                interface.id,
                interface.raw_contents().len()
            );

            if self.config.resolve_contents {
                for (content_index, decoded) in interface.decode_contents().into_iter().enumerate() {
                    if let Err(source) = decoded {
                        let error = ImportError::Content {
                            interface: interface.id.clone(),
                            index: content_index,
                            source,
                        };
                        if self.config.fail_fast {
                            return Err(error);
                        }
                        warn!("{}", error);
                        result.errors.push(error);
                    }
                }
            }

            if self.config.validates() {
                result.warnings.extend(self.validate(&interface).messages());
            }
            result.interfaces.push(interface);
        }

        info!(
            "Imported {} interfaces ({} errors, {} warnings)",
            result.interfaces.len(),
            result.errors.len(),
            result.warnings.len()
        );
        Ok(result)
    }

    /// Import interfaces from a file
    pub fn import_file(&self, path: impl AsRef<Path>) -> Result<ImportResult> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read model file: {}", path.display()))?;
        let result = self
            .import_str(&json)
            .with_context(|| format!("Failed to import models from {}", path.display()))?;
        Ok(result)
    }

    fn validate(&self, interface: &Interface) -> ValidationReport {
        let mut report = ValidationReport::for_interface(interface);
        if !self.config.check_duplicate_names {
            report.duplicate_names.clear();
        }
        if !self.config.check_identifiers {
            report.invalid_identifiers.clear();
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_single_object() {
        let result = ModelImporter::new()
            .import_str(r#"{"@id": "dtmi:com:example:Room;1", "@type": "Interface"}"#)
            .unwrap();
        assert_eq!(result.interfaces.len(), 1);
        assert!(result.is_clean());
    }

    #[test]
    fn test_import_rejects_scalar_document() {
        let err = ModelImporter::new().import_str("42").unwrap_err();
        assert!(matches!(err, ImportError::ParseError(_)));
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        let err = ModelImporter::new().import_str("{not json").unwrap_err();
        assert!(matches!(err, ImportError::ParseError(_)));
    }

    #[test]
    fn test_fail_fast_stops_at_first_error() {
        let importer = ModelImporter::with_config(ImportConfig::builder().fail_fast(true).build());
        let err = importer
            .import_str(r#"[{"@type": "Interface"}, {"@id": "dtmi:com:example:Room;1"}]"#)
            .unwrap_err();
        assert!(matches!(err, ImportError::Decode { index: 0, .. }));
    }
}
