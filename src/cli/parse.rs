//! Parse command implementation.
//!
//! Reads the design document, reports any content diagnostics, and writes
//! the card export as JSON even when some were found.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::export::{to_json, write_json};
use crate::output::{display_path, plural, Printer};
use crate::parser::load_document;
use crate::validation::{print_diagnostics, validate_document};

/// Parse a design document and write the card export
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Design document (default: `input` from bible.yaml)
    pub input: Option<PathBuf>,

    /// Output JSON file (default: `output` from bible.yaml)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print JSON to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

pub fn run(args: ParseArgs, printer: &Printer) -> Result<()> {
    let (manifest, input) = super::resolve_input(args.input.as_deref())?;

    printer.status("Parsing", &display_path(&input));
    let doc = load_document(&input)?;

    let result = validate_document(&doc);
    if !result.is_ok() {
        print_diagnostics(&result, printer);
        let summary = format!(
            "{}, {}",
            plural(result.error_count(), "error", "errors"),
            plural(result.warning_count(), "warning", "warnings")
        );
        // Content problems never block the export
        if result.has_errors() {
            printer.error("Problems", &summary);
        } else {
            printer.warning("Warning", &summary);
        }
    }

    if args.stdout {
        println!("{}", to_json(&doc)?);
        return Ok(());
    }

    let output = args.output.unwrap_or(manifest.output);
    write_json(&output, &doc)?;

    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(doc.len(), "card", "cards"),
            display_path(&output)
        ),
    );

    Ok(())
}
