//! Serialisable card records for downstream consumers.
//!
//! The gallery renderer and the image prompt builder read these rather than
//! [`CardRecord`] directly, since they also need the derived identities and
//! the image file name.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{BibleError, Result};
use crate::identity::{color_identity, group_identity};
use crate::types::{CardRecord, DocumentSections, ParsedDocument};

/// A card plus everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardExport {
    pub id: String,
    pub name: String,
    pub cost: String,
    pub type_line: String,
    pub rules_lines: Vec<String>,
    pub flavor_lines: Vec<String>,
    pub image: String,
    /// Color symbols in WUBRG order.
    pub colors: Vec<String>,
    pub group: String,
}

impl CardExport {
    pub fn from_card(card: &CardRecord) -> Self {
        Self {
            id: card.id.clone(),
            name: card.name.clone(),
            cost: card.cost.clone(),
            type_line: card.type_line.clone(),
            rules_lines: card.rules_lines.clone(),
            flavor_lines: card.flavor_lines.clone(),
            image: card.image_filename(),
            colors: color_identity(card)
                .iter()
                .map(|c| c.symbol().to_string())
                .collect(),
            group: group_identity(card).label(),
        }
    }
}

/// The whole document as written to JSON.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentExport<'a> {
    #[serde(flatten)]
    pub sections: &'a DocumentSections,
    pub cards: Vec<CardExport>,
}

/// Derive export records for every card, in document order.
pub fn export_cards(doc: &ParsedDocument) -> Vec<CardExport> {
    doc.cards.iter().map(CardExport::from_card).collect()
}

/// Render the document export as pretty-printed JSON.
pub fn to_json(doc: &ParsedDocument) -> Result<String> {
    let export = DocumentExport {
        sections: &doc.sections,
        cards: export_cards(doc),
    };

    serde_json::to_string_pretty(&export).map_err(|e| BibleError::Export {
        message: format!("Failed to serialize cards: {}", e),
        help: None,
    })
}

/// Write the document export to `path`, creating parent directories.
pub fn write_json(path: &Path, doc: &ParsedDocument) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| BibleError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    let json = to_json(doc)?;

    fs::write(path, json).map_err(|e| BibleError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write export: {}", e),
    })
}
