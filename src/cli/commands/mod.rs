//! CLI command handlers

pub mod format;
pub mod list;
pub mod validate;

pub use format::{FormatArgs, handle_format};
pub use list::handle_list;
pub use validate::{ValidateArgs, handle_validate};

use std::io::Read;
use std::path::PathBuf;

use crate::cli::error::CliError;

/// Load input content from file or stdin
pub(crate) fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}
