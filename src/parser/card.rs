//! Card finalisation: type line extraction and the rules/flavor split.

use crate::types::CardRecord;

use super::classify::is_rule_line;
use super::line::CardStart;

/// Typographic and straight opening double quotes.
const OPENING_QUOTES: &[char] = &['\u{201C}', '"'];

/// Whether a line opens with a quotation mark (always flavor).
pub fn is_quoted(line: &str) -> bool {
    line.starts_with(OPENING_QUOTES)
}

/// Split body lines (after the type line) into `(rules, flavor)`.
///
/// Scans bottom-up. Flavor trails rules in a card body, so the first rules
/// line found latches every line above it into rules, except quoted lines
/// which stay flavor wherever they sit. Both outputs keep top-to-bottom order.
pub fn split_rules_and_flavor<S: AsRef<str>>(lines: &[S]) -> (Vec<String>, Vec<String>) {
    let mut rules = Vec::new();
    let mut flavor = Vec::new();
    let mut in_flavor = true;

    for line in lines.iter().rev() {
        let line: &str = line.as_ref();
        if is_quoted(line) {
            flavor.push(line.to_string());
            continue;
        }

        if in_flavor && is_rule_line(line) {
            in_flavor = false;
        }

        if in_flavor {
            flavor.push(line.to_string());
        } else {
            rules.push(line.to_string());
        }
    }

    // Collected bottom-up; restore document order.
    rules.reverse();
    flavor.reverse();

    (rules, flavor)
}

/// Build a finished record from a card-start line and its buffered body.
pub fn finalize_card(start: CardStart, line: usize, body: Vec<String>) -> CardRecord {
    let mut lines = body.into_iter().filter(|l| !l.trim().is_empty());
    let type_line = lines.next().unwrap_or_default();
    let rest: Vec<String> = lines.collect();
    let (rules_lines, flavor_lines) = split_rules_and_flavor(&rest);

    CardRecord {
        id: start.id,
        name: start.name,
        cost: start.cost,
        type_line,
        rules_lines,
        flavor_lines,
        line,
        header: start.kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HeaderKind;
    use pretty_assertions::assert_eq;

    fn start() -> CardStart {
        CardStart {
            id: "M01".to_string(),
            name: "Test Card".to_string(),
            cost: "{1}{W}".to_string(),
            kind: HeaderKind::Structured,
        }
    }

    fn body(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_basic_split() {
        let card = finalize_card(
            start(),
            4,
            body(&["Creature — Test", "Flying", "\"A quote.\""]),
        );

        assert_eq!(card.type_line, "Creature — Test");
        assert_eq!(card.rules_lines, vec!["Flying"]);
        assert_eq!(card.flavor_lines, vec!["\"A quote.\""]);
        assert_eq!(card.line, 4);
    }

    #[test]
    fn test_rules_latch_pulls_prose_above() {
        let (rules, flavor) = split_rules_and_flavor(&[
            "When this arrives, nothing stirs.",
            "Draw a card.",
            "The wind remembers.",
        ]);

        assert_eq!(rules, vec!["When this arrives, nothing stirs.", "Draw a card."]);
        assert_eq!(flavor, vec!["The wind remembers."]);
    }

    #[test]
    fn test_quoted_line_is_flavor_even_above_rules() {
        let (rules, flavor) = split_rules_and_flavor(&[
            "“Sacrifice is the only currency.”",
            "Exalted",
            "\"Draw your blade.\" —Knight-Captain",
        ]);

        assert_eq!(rules, vec!["Exalted"]);
        assert_eq!(
            flavor,
            vec![
                "“Sacrifice is the only currency.”",
                "\"Draw your blade.\" —Knight-Captain",
            ]
        );
    }

    #[test]
    fn test_trailing_again_stays_flavor() {
        let (rules, flavor) = split_rules_and_flavor(&["Flying", "The storm came again."]);
        assert_eq!(rules, vec!["Flying"]);
        assert_eq!(flavor, vec!["The storm came again."]);
    }

    #[test]
    fn test_all_prose_is_flavor() {
        let (rules, flavor) = split_rules_and_flavor(&["Quiet hills.", "Silver clouds."]);
        assert!(rules.is_empty());
        assert_eq!(flavor.len(), 2);
    }

    #[test]
    fn test_empty_body() {
        let card = finalize_card(start(), 1, Vec::new());
        assert!(card.is_empty());
        assert_eq!(card.name, "Test Card");
    }

    #[test]
    fn test_blank_lines_dropped_before_type_line() {
        let card = finalize_card(start(), 1, body(&["", "  ", "Artifact", "", "Flash"]));
        assert_eq!(card.type_line, "Artifact");
        assert_eq!(card.rules_lines, vec!["Flash"]);
        assert!(card.flavor_lines.is_empty());
    }

    #[test]
    fn test_partition_preserves_every_line() {
        let lines = [
            "Whenever a creature dies, gain 1 life.",
            "Sunlight on brass.",
            "\"It hums.\"",
            "Shadows lengthen.",
        ];
        let (rules, flavor) = split_rules_and_flavor(&lines);

        assert_eq!(rules.len() + flavor.len(), lines.len());
        for line in lines {
            assert!(rules.iter().any(|l| l == line) != flavor.iter().any(|l| l == line));
        }
    }
}
