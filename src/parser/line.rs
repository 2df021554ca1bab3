//! Line-level recognition: normalisation, section headers, card-start lines.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{HeaderKind, Section};

/// Markdown heading hashes, or a bullet/quote marker followed by whitespace.
static LEADING_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:#+\s*|[-*•>]\s+)").unwrap());

/// `[ID] Name` with an optional trailing run of `{...}` cost symbols.
/// The name may not open with `{`, so a cost-only header is not structured.
static CARD_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[([A-Za-z0-9]+)\]\s+([^{\s].*?)(?:\s*(\{[^{}]*\}(?:\s*\{[^{}]*\})*))?\s*$").unwrap()
});

/// Any line opening with a bracketed alphanumeric tag.
static CARD_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[[A-Za-z0-9]+\]").unwrap());

/// Header substrings, checked in order. Matching is case-sensitive so that
/// prose mentioning "mechanics" does not flip the section.
const SECTION_HEADERS: &[(&str, Section)] = &[
    ("CARD FILE", Section::Cards),
    ("CARD LIST", Section::Cards),
    ("MECHANICS", Section::Mechanics),
    ("FLAVOR", Section::Flavor),
    ("WORLD", Section::Flavor),
];

/// Strip a leading list/heading marker and surrounding whitespace.
pub fn normalize_line(raw: &str) -> &str {
    let stripped = match LEADING_MARKER.find(raw) {
        Some(m) => &raw[m.end()..],
        None => raw,
    };
    stripped.trim()
}

/// The section a header line announces, if any.
pub fn detect_section(line: &str) -> Option<Section> {
    SECTION_HEADERS
        .iter()
        .find(|(needle, _)| line.contains(needle))
        .map(|(_, section)| *section)
}

/// Fields captured from a card-start line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStart {
    pub id: String,
    pub name: String,
    pub cost: String,
    pub kind: HeaderKind,
}

/// Recognize a card-start line.
///
/// A full `[ID] Name {cost}` match captures all three fields. A line that only
/// begins with a bracket tag degrades to an empty id with the raw line as name.
pub fn parse_card_start(line: &str) -> Option<CardStart> {
    if let Some(caps) = CARD_HEADER.captures(line) {
        let name = caps[2].trim();
        if !name.is_empty() {
            return Some(CardStart {
                id: caps[1].to_string(),
                name: name.to_string(),
                cost: caps
                    .get(3)
                    .map(|m| m.as_str().split_whitespace().collect())
                    .unwrap_or_default(),
                kind: HeaderKind::Structured,
            });
        }
    }

    if CARD_TAG.is_match(line) {
        return Some(CardStart {
            id: String::new(),
            name: line.to_string(),
            cost: String::new(),
            kind: HeaderKind::Degraded,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_markers() {
        assert_eq!(normalize_line("## 3. CARD FILE  "), "3. CARD FILE");
        assert_eq!(normalize_line("  - Flying"), "Flying");
        assert_eq!(normalize_line("> \"A quote.\""), "\"A quote.\"");
        assert_eq!(normalize_line("   "), "");
    }

    #[test]
    fn test_normalize_keeps_loyalty_minus() {
        assert_eq!(normalize_line("-2: Destroy target creature."), "-2: Destroy target creature.");
    }

    #[test]
    fn test_detect_section() {
        assert_eq!(detect_section("3. CARD FILE"), Some(Section::Cards));
        assert_eq!(detect_section("2. MECHANICS"), Some(Section::Mechanics));
        assert_eq!(detect_section("1. FLAVOR & WORLD"), Some(Section::Flavor));
        assert_eq!(detect_section("The mechanics of the world"), None);
    }

    #[test]
    fn test_structured_header_with_cost() {
        let start = parse_card_start("[M01] Test Card {1}{W}").unwrap();
        assert_eq!(start.id, "M01");
        assert_eq!(start.name, "Test Card");
        assert_eq!(start.cost, "{1}{W}");
        assert_eq!(start.kind, HeaderKind::Structured);
    }

    #[test]
    fn test_structured_header_spaced_cost() {
        let start = parse_card_start("[C12] Sigil Knight {2} {G}{W}").unwrap();
        assert_eq!(start.name, "Sigil Knight");
        assert_eq!(start.cost, "{2}{G}{W}");
    }

    #[test]
    fn test_structured_header_without_cost() {
        let start = parse_card_start("[L03] Esper Panorama").unwrap();
        assert_eq!(start.name, "Esper Panorama");
        assert_eq!(start.cost, "");
    }

    #[test]
    fn test_degraded_header() {
        let start = parse_card_start("[M02]Broken Header").unwrap();
        assert_eq!(start.id, "");
        assert_eq!(start.name, "[M02]Broken Header");
        assert_eq!(start.kind, HeaderKind::Degraded);

        let bare = parse_card_start("[M03]").unwrap();
        assert_eq!(bare.kind, HeaderKind::Degraded);
    }

    #[test]
    fn test_cost_only_header_is_degraded() {
        let start = parse_card_start("[M01] {1}{W}").unwrap();
        assert_eq!(start.kind, HeaderKind::Degraded);
        assert_eq!(start.id, "");
        assert_eq!(start.name, "[M01] {1}{W}");
        assert_eq!(start.cost, "");
    }

    #[test]
    fn test_not_a_card_start() {
        assert!(parse_card_start("Creature — Human Knight").is_none());
        assert!(parse_card_start("[see below] notes").is_none());
        assert!(parse_card_start("{T}: Add {G}.").is_none());
    }
}
