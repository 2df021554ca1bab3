//! bible - Card records from freeform set design documents
//!
//! A library for recovering typed card records from a loosely structured
//! design document, splitting each card's text into rules and flavor, and
//! deriving color and shard identities for downstream renderers.

pub mod cli;
pub mod error;
pub mod export;
pub mod identity;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{BibleError, Result};
pub use export::{export_cards, to_json, write_json, CardExport};
pub use identity::{color_identity, group_identity, GROUP_RULES};
pub use manifest::Manifest;
pub use parser::{is_rule_line, load_document, parse_document};
pub use types::{
    CardRecord, Color, ColorSet, DocumentSections, Group, HeaderKind, ParsedDocument, Section,
    Shard,
};
pub use validation::{validate_document, Diagnostic, Severity, ValidationResult};
