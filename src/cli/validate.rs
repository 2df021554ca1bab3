//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::{BibleError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::load_document;
use crate::validation::{print_diagnostics, validate_document, validate_with_images};

/// Report malformed headers, empty cards, and duplicate ids
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Design document (default: `input` from bible.yaml)
    pub input: Option<PathBuf>,

    /// Also check that every card has an image in the images directory
    #[arg(long)]
    pub images: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let (manifest, input) = super::resolve_input(args.input.as_deref())?;

    printer.status("Checking", &display_path(&input));
    let doc = load_document(&input)?;

    let result = if args.images {
        validate_with_images(&doc, &manifest.images)
    } else {
        validate_document(&doc)
    };

    print_diagnostics(&result, printer);

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 || (args.strict && warnings > 0) {
        printer.error(
            "Failed",
            &format!(
                "{}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
        );
        return Err(BibleError::Validation {
            message: format!("{} has problems", display_path(&input)),
            help: if args.strict && errors == 0 {
                Some("Drop --strict to accept warnings".to_string())
            } else {
                None
            },
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{} checked, {}",
            plural(doc.len(), "card", "cards"),
            plural(warnings, "warning", "warnings")
        ),
    );

    Ok(())
}
