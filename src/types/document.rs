//! The result of parsing a whole design document.

use serde::Serialize;

use super::card::{CardRecord, HeaderKind};
use super::sections::DocumentSections;

/// Cards in document order plus the auxiliary section buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedDocument {
    pub cards: Vec<CardRecord>,
    pub sections: DocumentSections,
}

impl ParsedDocument {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up the first card with the given id.
    pub fn get(&self, id: &str) -> Option<&CardRecord> {
        self.cards.iter().find(|c| !c.id.is_empty() && c.id == id)
    }

    /// Cards whose header only partially matched.
    pub fn degraded(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter().filter(|c| c.header == HeaderKind::Degraded)
    }
}
