//! Format command implementation
//!
//! Re-encodes a document through the codec, normalizing whitespace while
//! keeping every key and its order.

use std::path::PathBuf;

use crate::cli::commands::load_input;
use crate::cli::error::CliError;
use crate::export::ModelExporter;
use crate::import::{ImportConfig, ModelImporter};

/// Arguments for the `format` command
pub struct FormatArgs {
    /// Input file, or `-` for stdin
    pub input: String,
    /// Write single-line JSON
    pub compact: bool,
    /// Output file (stdout if not provided)
    pub output: Option<PathBuf>,
}

/// Handle the format command
pub fn handle_format(args: &FormatArgs) -> Result<(), CliError> {
    let content = load_input(&args.input)?;

    let config = ImportConfig::builder()
        .fail_fast(true)
        .check_duplicate_names(false)
        .check_identifiers(false)
        .build();
    let result = ModelImporter::with_config(config).import_str(&content)?;

    let exporter = if args.compact {
        ModelExporter::compact()
    } else {
        ModelExporter::pretty()
    };

    match &args.output {
        Some(path) => {
            let exported = exporter.export_to_file(&result.interfaces, path)?;
            eprintln!(
                "Wrote {} interface(s) to {}",
                exported.count,
                path.display()
            );
        }
        None => println!("{}", exporter.export(&result.interfaces)?.content),
    }
    Ok(())
}
