//! Validation checks over a parsed document.
//!
//! Each check takes a `&ParsedDocument` and returns a `ValidationResult`.
//! Problems with individual cards are warnings, since parsing already
//! produced a best-effort record. A document with no cards at all is an
//! error: there is nothing to export.

use std::collections::HashMap;
use std::path::Path;

use crate::types::ParsedDocument;

use super::warning::{Diagnostic, ValidationResult};

/// Fail when the document produced no cards at all.
pub fn check_no_cards(doc: &ParsedDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    if doc.cards.is_empty() {
        result.push(
            Diagnostic::error("bible::validate::no-cards", "No cards found in document")
                .with_help("Cards are only read after a header line containing `CARD FILE`"),
        );
    }

    result
}

/// Warn on card-start lines that only partially matched `[ID] Name {cost}`.
pub fn check_degraded_headers(doc: &ParsedDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for card in doc.degraded() {
        result.push(
            Diagnostic::warning(
                "bible::validate::degraded-header",
                format!("Card header '{}' has no parseable id or name", card.name),
            )
            .at_line(card.line)
            .with_help("Use the form `[ID] Name {cost}` with a space after the tag"),
        );
    }

    result
}

/// Warn on cards with no body lines.
pub fn check_empty_bodies(doc: &ParsedDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for card in doc.cards.iter().filter(|c| c.is_empty()) {
        result.push(
            Diagnostic::warning(
                "bible::validate::empty-body",
                format!("Card '{}' has no type line or text", card.name),
            )
            .at_line(card.line),
        );
    }

    result
}

/// Warn when two cards share an id.
pub fn check_duplicate_ids(doc: &ParsedDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for card in doc.cards.iter().filter(|c| !c.id.is_empty()) {
        if let Some(first) = seen.get(card.id.as_str()) {
            result.push(
                Diagnostic::warning(
                    "bible::validate::duplicate-id",
                    format!("Id '{}' already used on line {}", card.id, first),
                )
                .at_line(card.line)
                .with_help("Image file names include the id; duplicates will collide"),
            );
        } else {
            seen.insert(card.id.as_str(), card.line);
        }
    }

    result
}

/// Warn on cards whose image is missing from `images`.
pub fn check_missing_images(doc: &ParsedDocument, images: &Path) -> ValidationResult {
    let mut result = ValidationResult::new();

    for card in &doc.cards {
        let path = images.join(card.image_filename());
        if !path.exists() {
            result.push(
                Diagnostic::warning(
                    "bible::validate::missing-image",
                    format!("No image for '{}' at {}", card.name, path.display()),
                )
                .at_line(card.line),
            );
        }
    }

    result
}
