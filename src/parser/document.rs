//! Document scanning.
//!
//! A single forward pass over the design document. The scanner tracks which
//! section it is in and, inside the card file, which card is currently open.
//! Sections only move forward; once the card file starts, header lines are
//! treated as ordinary content.

use crate::types::{DocumentSections, HeaderKind, ParsedDocument, Section};

use super::card::finalize_card;
use super::line::{detect_section, normalize_line, parse_card_start, CardStart};

/// A card whose body is still being collected.
#[derive(Debug)]
struct OpenCard {
    start: CardStart,
    line: usize,
    body: Vec<String>,
}

/// Scanner state: current section plus the optional open card.
#[derive(Debug)]
struct Scanner {
    section: Section,
    open: Option<OpenCard>,
    document: ParsedDocument,
}

impl Scanner {
    fn new() -> Self {
        Self {
            section: Section::Default,
            open: None,
            document: ParsedDocument {
                cards: Vec::new(),
                sections: DocumentSections::new(),
            },
        }
    }

    fn feed(&mut self, line_no: usize, line: &str) {
        if self.section != Section::Cards {
            if let Some(next) = detect_section(line) {
                if next > self.section {
                    log::debug!(
                        "line {}: entering {} section",
                        line_no,
                        next.name()
                    );
                    self.section = next;
                    return;
                }
            }
            self.document.sections.push(self.section, line);
            return;
        }

        if let Some(start) = parse_card_start(line) {
            self.close();
            if start.kind == HeaderKind::Degraded {
                log::warn!(
                    "line {}: card header does not match `[ID] Name {{cost}}`, keeping raw line as name",
                    line_no
                );
            }
            self.open = Some(OpenCard {
                start,
                line: line_no,
                body: Vec::new(),
            });
            return;
        }

        match self.open.as_mut() {
            Some(card) => card.body.push(line.to_string()),
            None => log::debug!("line {}: discarding text before first card", line_no),
        }
    }

    /// Finalize and emit the open card, if any.
    fn close(&mut self) {
        if let Some(open) = self.open.take() {
            let card = finalize_card(open.start, open.line, open.body);
            if card.is_empty() {
                log::warn!("line {}: card '{}' has no body", card.line, card.name);
            }
            log::debug!("emitted card '{}' ({})", card.name, card.image_filename());
            self.document.cards.push(card);
        }
    }

    fn finish(mut self) -> ParsedDocument {
        self.close();
        self.document
    }
}

/// Parse a design document into card records and auxiliary sections.
///
/// Never fails: malformed card headers degrade to records with an empty id,
/// and text that fits nowhere is dropped.
pub fn parse_document(source: &str) -> ParsedDocument {
    let mut scanner = Scanner::new();

    for (i, raw) in source.lines().enumerate() {
        let line = normalize_line(raw);
        if line.is_empty() {
            continue;
        }
        scanner.feed(i + 1, line);
    }

    let document = scanner.finish();
    log::debug!("parsed {} card(s)", document.cards.len());
    document
}
