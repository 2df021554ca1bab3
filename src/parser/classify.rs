//! Rules-vs-flavor line classification.
//!
//! A line heuristic, not a grammar: flavor prose that happens to mention
//! a vocabulary word is misread as rules, and rules text using none of the
//! cues below is misread as flavor.

use once_cell::sync::Lazy;
use regex::Regex;

/// Ability-word lead-in such as `Hellbent —`.
static ABILITY_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]+ —").unwrap());

/// Leveled keyword such as `Devour 2` or `Bushido 1`.
static LEVELED_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]+ \d+$").unwrap());

/// Lowercase terms whose presence anywhere in a line marks it as rules text.
pub const RULES_VOCABULARY: &[&str] = &[
    // zones
    "battlefield",
    "graveyard",
    "library",
    "exile",
    "your hand",
    // actions
    "draw",
    "discard",
    "sacrifice",
    "destroy",
    "counter target",
    "target",
    "untap",
    "search your",
    "shuffle",
    "return",
    "create",
    "token",
    "deals",
    "damage",
    "gain control",
    "gains control",
    "life",
    "mana",
    "enters",
    "dies",
    "attacks",
    "blocks",
    "until end of turn",
    "at the beginning",
    "whenever",
    "you control",
    "spell",
    // evergreen keywords
    "flying",
    "first strike",
    "double strike",
    "deathtouch",
    "defender",
    "haste",
    "hexproof",
    "indestructible",
    "lifelink",
    "menace",
    "reach",
    "trample",
    "vigilance",
    "flash",
    "equip",
    "enchant",
    // set keywords
    "exalted",
    "unearth",
    "devour",
    "cascade",
    "domain",
    "affinity",
    // stat modification
    "+1/+1",
    "-1/-1",
    "+x/+x",
    "/+0",
    "+0/",
];

/// Whether `line` carries game-mechanical content.
///
/// Checked in order: a `{` or `}` symbol delimiter, an ability-word lead-in,
/// a leveled keyword, then a case-insensitive vocabulary search. Empty input
/// is never a rules line.
pub fn is_rule_line(line: &str) -> bool {
    if line.is_empty() {
        return false;
    }

    if line.contains('{') || line.contains('}') {
        return true;
    }

    if ABILITY_WORD.is_match(line) || LEVELED_KEYWORD.is_match(line) {
        return true;
    }

    let lowered = line.to_lowercase();
    RULES_VOCABULARY.iter().any(|term| lowered.contains(term))
}
