//! Parser for card-set design documents.
//!
//! A design document is loosely structured prose with three informal
//! sections flagged by header lines (world/flavor, mechanics, card file).
//! Inside the card file each card opens with a tagged line:
//!
//! ```text
//! [M01] Test Card {1}{W}
//! Creature — Test
//! Flying
//! "A quote."
//! ```
//!
//! The first body line is the type line; the remaining lines are split into
//! rules and flavor paragraphs by a line classifier.
//!
//! # Usage
//!
//! ```ignore
//! use bible::parser::load_document;
//!
//! let doc = load_document("design_bible.md")?;
//! for card in &doc.cards {
//!     println!("{} {}", card.id, card.name);
//! }
//! ```

mod card;
mod document;
pub mod classify;
pub mod line;

use std::fs;
use std::path::Path;

use crate::error::{BibleError, Result};
use crate::types::ParsedDocument;

pub use card::{finalize_card, is_quoted, split_rules_and_flavor};
pub use classify::{is_rule_line, RULES_VOCABULARY};
pub use document::parse_document;
pub use line::{detect_section, normalize_line, parse_card_start, CardStart};

/// Read and parse a design document from disk.
///
/// The only hard failure is a missing or unreadable file.
pub fn load_document(path: impl AsRef<Path>) -> Result<ParsedDocument> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BibleError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let source = fs::read_to_string(path).map_err(|e| BibleError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read document: {}", e),
    })?;

    Ok(parse_document(&source))
}
