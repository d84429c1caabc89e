//! List command implementation

use crate::cli::commands::load_input;
use crate::cli::error::CliError;
use crate::cli::output::format_interface_listing;
use crate::import::{ImportConfig, ModelImporter};

/// Handle the list command
pub fn handle_list(input: &str) -> Result<(), CliError> {
    let content = load_input(input)?;

    let config = ImportConfig::builder()
        .check_duplicate_names(false)
        .check_identifiers(false)
        .build();
    let result = ModelImporter::with_config(config).import_str(&content)?;

    for error in &result.errors {
        eprintln!("⚠️  {}", error);
    }
    for interface in &result.interfaces {
        print!("{}", format_interface_listing(interface));
    }
    Ok(())
}
