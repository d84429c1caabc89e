//! Export functionality
//!
//! Serializes interfaces back to DTDL JSON text.

pub mod dtdl;

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    /// Exported JSON text
    pub content: String,
    /// Number of interfaces written
    pub count: usize,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::IoError(err.to_string())
    }
}

pub use dtdl::ModelExporter;
