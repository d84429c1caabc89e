//! DTDL document export

use std::path::Path;

use serde_json::Value;
use tracing::info;

use super::{ExportError, ExportResult};
use crate::codec::WireCodec;
use crate::models::Interface;

/// Exporter for DTDL JSON documents
#[derive(Debug, Clone, Copy)]
pub struct ModelExporter {
    pretty: bool,
}

impl Default for ModelExporter {
    fn default() -> Self {
        Self::pretty()
    }
}

impl ModelExporter {
    /// Exporter producing indented JSON
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Exporter producing single-line JSON
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Export interfaces as one document
    ///
    /// A single interface is written as an object, anything else as an array.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dtdl_sdk::export::ModelExporter;
    /// use dtdl_sdk::models::Interface;
    ///
    /// let room = Interface::new("dtmi:com:example:Room;1");
    /// let result = ModelExporter::compact().export(&[room]).unwrap();
    ///
    /// assert_eq!(result.content, r#"{"@id":"dtmi:com:example:Room;1","@type":"Interface"}"#);
    /// ```
    pub fn export(&self, interfaces: &[Interface]) -> Result<ExportResult, ExportError> {
        let document = match interfaces {
            [single] => single.encode(),
            many => Value::Array(many.iter().map(WireCodec::encode).collect()),
        };
        Ok(ExportResult {
            content: self.render(&document)?,
            count: interfaces.len(),
        })
    }

    /// Export a single interface as an object
    pub fn export_interface(&self, interface: &Interface) -> Result<String, ExportError> {
        self.render(&interface.encode())
    }

    /// Export interfaces to a file
    pub fn export_to_file(
        &self,
        interfaces: &[Interface],
        path: impl AsRef<Path>,
    ) -> Result<ExportResult, ExportError> {
        let path = path.as_ref();
        let result = self.export(interfaces)?;
        std::fs::write(path, &result.content)?;
        info!("Exported {} interfaces to {}", result.count, path.display());
        Ok(result)
    }

    fn render(&self, document: &Value) -> Result<String, ExportError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        Ok(text)
    }
}
