//! dtdl command line tool

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dtdl_sdk::cli::CliError;
use dtdl_sdk::cli::commands::{
    FormatArgs, ValidateArgs, handle_format, handle_list, handle_validate,
};

#[derive(Parser)]
#[command(name = "dtdl", version, about = "Work with DTDL interface documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a document and report errors and warnings
    Validate {
        /// Input file, or '-' for stdin
        input: String,
        /// Decode every content entry as well
        #[arg(long)]
        resolve_contents: bool,
        /// Fail on warnings too
        #[arg(long)]
        strict: bool,
    },
    /// Re-encode a document
    Format {
        /// Input file, or '-' for stdin
        input: String,
        /// Write single-line JSON
        #[arg(long)]
        compact: bool,
        /// Output file (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List interfaces and their contents
    List {
        /// Input file, or '-' for stdin
        input: String,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Validate {
            input,
            resolve_contents,
            strict,
        } => handle_validate(&ValidateArgs {
            input,
            resolve_contents,
            strict,
        }),
        Commands::Format {
            input,
            compact,
            output,
        } => handle_format(&FormatArgs {
            input,
            compact,
            output,
        }),
        Commands::List { input } => handle_list(&input),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
