//! Import functionality
//!
//! Reads DTDL documents into [`Interface`] values. A document holds either a
//! single interface object or an array of them.

pub mod config;
pub mod dtdl;

pub use config::{ImportConfig, ImportConfigBuilder};
pub use dtdl::ModelImporter;

use crate::codec::DecodeError;
use crate::models::Interface;

/// Result of an import operation
#[derive(Debug, Default)]
pub struct ImportResult {
    /// Interfaces decoded from the document, in document order
    pub interfaces: Vec<Interface>,
    /// Interfaces or content entries that failed to decode
    pub errors: Vec<ImportError>,
    /// Validation findings, one message each
    pub warnings: Vec<String>,
}

impl ImportResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Interface {index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: DecodeError,
    },
    #[error("{interface} contents[{index}]: {source}")]
    Content {
        interface: String,
        index: usize,
        #[source]
        source: DecodeError,
    },
}
