//! Validation for parsed design documents.
//!
//! Runs a suite of checks and reports warnings. Used by both
//! `bible validate` and `bible parse`.

mod checks;
mod warning;

use std::path::Path;

pub use checks::{
    check_degraded_headers, check_duplicate_ids, check_empty_bodies, check_missing_images,
    check_no_cards,
};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::types::ParsedDocument;

/// Run all content checks against the document.
pub fn validate_document(doc: &ParsedDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_no_cards(doc));
    result.merge(checks::check_degraded_headers(doc));
    result.merge(checks::check_empty_bodies(doc));
    result.merge(checks::check_duplicate_ids(doc));

    result
}

/// Content checks plus image presence, when the image directory exists.
pub fn validate_with_images(doc: &ParsedDocument, images: &Path) -> ValidationResult {
    let mut result = validate_document(doc);
    if images.is_dir() {
        result.merge(checks::check_missing_images(doc, images));
    }
    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        match d.line {
            Some(line) => eprintln!("  {}[{}]: line {}: {}", label, d.code, line, d.message),
            None => eprintln!("  {}[{}]: {}", label, d.code, d.message),
        }
        if let Some(help) = &d.help {
            eprintln!("    {}", printer.dim(&format!("help: {}", help)));
        }
    }
}
