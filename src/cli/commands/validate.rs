//! Validate command implementation

use crate::cli::commands::load_input;
use crate::cli::error::CliError;
use crate::cli::output::format_import_report;
use crate::import::{ImportConfig, ModelImporter};

/// Arguments for the `validate` command
pub struct ValidateArgs {
    /// Input file, or `-` for stdin
    pub input: String,
    /// Decode every content entry, not just the interface envelope
    pub resolve_contents: bool,
    /// Treat validation warnings as failures
    pub strict: bool,
}

/// Handle the validate command
pub fn handle_validate(args: &ValidateArgs) -> Result<(), CliError> {
    let content = load_input(&args.input)?;

    let config = ImportConfig::builder()
        .resolve_contents(args.resolve_contents)
        .build();
    let result = ModelImporter::with_config(config).import_str(&content)?;

    eprint!("{}", format_import_report(&result));

    if !result.errors.is_empty() {
        return Err(CliError::ValidationError(format!(
            "{} error(s) found",
            result.errors.len()
        )));
    }
    if args.strict && !result.warnings.is_empty() {
        return Err(CliError::ValidationError(format!(
            "{} warning(s) found",
            result.warnings.len()
        )));
    }

    println!("Validation successful");
    Ok(())
}
