//! CLI error type

use std::path::PathBuf;

use crate::export::ExportError;
use crate::import::ImportError;

/// Error raised by a CLI command
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),
    #[error("Import failed: {0}")]
    ImportError(#[from] ImportError),
    #[error("Export failed: {0}")]
    ExportError(#[from] ExportError),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
