//! Derived identities: which colors a card uses and which shard it belongs to.
//!
//! Group identity is a prioritized cascade. Each rule in [`GROUP_RULES`] is
//! tried in order and the first one that yields a group wins, so a name
//! keyword always beats rules-text markers, which beat color combinations,
//! and so on down to [`Group::Unaligned`].

use std::collections::BTreeMap;

use crate::types::{CardRecord, Color, ColorSet, Group, ParsedDocument, Shard};

/// Colors whose bracketed symbol appears in the cost or rules text.
pub fn color_identity(card: &CardRecord) -> ColorSet {
    let mut text = card.cost.to_lowercase();
    for line in &card.rules_lines {
        text.push('\n');
        text.push_str(&line.to_lowercase());
    }

    Color::ALL
        .into_iter()
        .filter(|c| text.contains(c.token()))
        .collect()
}

/// Lowercased views of a card, computed once per cascade run.
#[derive(Debug, Clone)]
pub struct Evidence {
    pub name: String,
    pub rules: String,
    pub type_line: String,
    pub colors: ColorSet,
}

impl Evidence {
    pub fn from_card(card: &CardRecord) -> Self {
        Self {
            name: card.name.to_lowercase(),
            rules: card.rules_text().to_lowercase(),
            type_line: card.type_line.to_lowercase(),
            colors: color_identity(card),
        }
    }
}

/// One step of the group cascade.
pub struct GroupRule {
    pub name: &'static str,
    pub apply: fn(&Evidence) -> Option<Group>,
}

/// Cascade order. Earlier rules win.
pub const GROUP_RULES: &[GroupRule] = &[
    GroupRule { name: "name-keyword", apply: by_name },
    GroupRule { name: "rules-marker", apply: by_rules_marker },
    GroupRule { name: "three-colors", apply: by_three_colors },
    GroupRule { name: "two-colors", apply: by_two_colors },
    GroupRule { name: "type-keyword", apply: by_type_line },
    GroupRule { name: "many-colors", apply: by_many_colors },
];

const RULES_MARKERS: &[(&str, Group)] = &[
    ("exalted", Group::Shard(Shard::Bant)),
    ("affinity", Group::Shard(Shard::Esper)),
    ("unearth", Group::Shard(Shard::Grixis)),
    ("devour", Group::Shard(Shard::Jund)),
    ("power 5 or greater", Group::Shard(Shard::Naya)),
    ("cascade", Group::MultiShard),
];

/// Allied pairs and the two shards each could belong to.
const COLOR_PAIRS: &[(&str, Shard, Shard)] = &[
    ("WU", Shard::Bant, Shard::Esper),
    ("UB", Shard::Esper, Shard::Grixis),
    ("BR", Shard::Grixis, Shard::Jund),
    ("RG", Shard::Jund, Shard::Naya),
    ("WG", Shard::Naya, Shard::Bant),
];

const TYPE_KEYWORDS: &[(&str, Shard)] = &[
    ("artifact", Shard::Esper),
    ("sphinx", Shard::Esper),
    ("zombie", Shard::Grixis),
    ("skeleton", Shard::Grixis),
    ("dragon", Shard::Jund),
    ("goblin", Shard::Jund),
    ("viashino", Shard::Jund),
    ("beast", Shard::Naya),
    ("elf", Shard::Naya),
    ("giant", Shard::Naya),
    ("knight", Shard::Bant),
    ("angel", Shard::Bant),
    ("rhox", Shard::Bant),
];

fn by_name(ev: &Evidence) -> Option<Group> {
    Shard::ALL
        .into_iter()
        .find(|s| ev.name.contains(&s.name().to_lowercase()))
        .map(Group::Shard)
}

fn by_rules_marker(ev: &Evidence) -> Option<Group> {
    RULES_MARKERS
        .iter()
        .find(|(marker, _)| ev.rules.contains(marker))
        .map(|(_, group)| *group)
}

fn by_three_colors(ev: &Evidence) -> Option<Group> {
    if ev.colors.len() != 3 {
        return None;
    }
    Shard::ALL
        .into_iter()
        .find(|s| s.colors() == ev.colors)
        .map(Group::Shard)
}

fn by_two_colors(ev: &Evidence) -> Option<Group> {
    if ev.colors.len() != 2 {
        return None;
    }
    COLOR_PAIRS
        .iter()
        .find(|(pair, _, _)| ColorSet::from_symbols(pair) == ev.colors)
        .map(|(_, a, b)| Group::Either(*a, *b))
}

fn by_type_line(ev: &Evidence) -> Option<Group> {
    TYPE_KEYWORDS
        .iter()
        .find(|(keyword, _)| ev.type_line.contains(keyword))
        .map(|(_, shard)| Group::Shard(*shard))
}

fn by_many_colors(ev: &Evidence) -> Option<Group> {
    (ev.colors.len() >= 4).then_some(Group::Maelstrom)
}

/// Assign a card to exactly one group.
pub fn group_identity(card: &CardRecord) -> Group {
    let evidence = Evidence::from_card(card);
    GROUP_RULES
        .iter()
        .find_map(|rule| (rule.apply)(&evidence))
        .unwrap_or(Group::Unaligned)
}

/// Card counts per group label, sorted by label.
pub fn group_counts(doc: &ParsedDocument) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for card in &doc.cards {
        *counts.entry(group_identity(card).label()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, cost: &str) -> CardRecord {
        CardRecord::new("T01", name, cost)
    }

    fn evidence(card: &CardRecord) -> Evidence {
        Evidence::from_card(card)
    }

    #[test]
    fn test_color_identity_from_cost() {
        let colors = color_identity(&card("Test", "{2}{W}{U}"));
        assert_eq!(colors, ColorSet::new().with(Color::White).with(Color::Blue));
    }

    #[test]
    fn test_color_identity_empty() {
        let c = card("Test", "").with_rules(["Draw a card."]);
        assert!(color_identity(&c).is_empty());
    }

    #[test]
    fn test_color_identity_reads_rules_and_case() {
        let c = card("Test", "{1}{r}").with_rules(["{g}: Regenerate.", "{R}{R}: Pump."]);
        assert_eq!(color_identity(&c).symbols(), "RG");
    }

    #[test]
    fn test_color_identity_ignores_flavor_and_type() {
        let c = card("Test", "{3}")
            .with_type_line("Artifact {B}")
            .with_flavor(["\"{U} is for the sky.\""]);
        assert!(color_identity(&c).is_empty());
    }

    #[test]
    fn test_name_keyword_beats_colors() {
        let c = card("Esper Stormwatcher", "{R}{G}{W}");
        assert_eq!(group_identity(&c), Group::Shard(Shard::Esper));
    }

    #[test]
    fn test_name_keyword_case_insensitive() {
        assert_eq!(by_name(&evidence(&card("JUND warlord", ""))), Some(Group::Shard(Shard::Jund)));
        assert_eq!(by_name(&evidence(&card("Sky Warden", ""))), None);
    }

    #[test]
    fn test_rules_marker() {
        let c = card("Sky Warden", "{W}{U}{B}").with_rules(["Exalted"]);
        assert_eq!(group_identity(&c), Group::Shard(Shard::Bant));

        let multi = card("Bloodbraid Elf", "{2}{R}{G}").with_rules(["Cascade"]);
        assert_eq!(by_rules_marker(&evidence(&multi)), Some(Group::MultiShard));
    }

    #[test]
    fn test_rules_marker_before_three_colors() {
        let c = card("Corpse Hauler", "{U}{B}{R}").with_rules(["Devour 1"]);
        assert_eq!(group_identity(&c), Group::Shard(Shard::Jund));
    }

    #[test]
    fn test_three_colors() {
        let c = card("Windborne Sage", "{G}{W}{U}");
        assert_eq!(group_identity(&c), Group::Shard(Shard::Bant));

        // Enemy wedge matches no shard
        let wedge = card("Odd One", "{W}{B}{G}");
        assert_eq!(by_three_colors(&evidence(&wedge)), None);
    }

    #[test]
    fn test_two_colors_is_ambiguous() {
        let c = card("Tidal Scholar", "{1}{U}{B}");
        assert_eq!(group_identity(&c), Group::Either(Shard::Esper, Shard::Grixis));
        assert_eq!(group_identity(&c).label(), "Esper or Grixis");
    }

    #[test]
    fn test_enemy_pair_falls_through_to_type() {
        let c = card("Grave Rider", "{W}{B}").with_type_line("Creature — Zombie Knight");
        assert_eq!(by_two_colors(&evidence(&c)), None);
        assert_eq!(group_identity(&c), Group::Shard(Shard::Grixis));
    }

    #[test]
    fn test_type_keyword() {
        let c = card("Clockwork Thing", "{4}").with_type_line("Artifact Creature — Construct");
        assert_eq!(group_identity(&c), Group::Shard(Shard::Esper));
    }

    #[test]
    fn test_many_colors() {
        let c = card("Convergence", "{W}{U}{B}{R}");
        assert_eq!(group_identity(&c), Group::Maelstrom);
    }

    #[test]
    fn test_default_group() {
        let c = card("Plain Stone", "{2}").with_type_line("Land");
        assert_eq!(group_identity(&c), Group::Unaligned);
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = GROUP_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "name-keyword",
                "rules-marker",
                "three-colors",
                "two-colors",
                "type-keyword",
                "many-colors"
            ]
        );
    }

    #[test]
    fn test_group_counts() {
        let doc = ParsedDocument {
            cards: vec![
                card("Naya Hushblade", ""),
                card("Naya Charm", ""),
                card("Plain Stone", ""),
            ],
            ..Default::default()
        };

        let counts = group_counts(&doc);

        assert_eq!(counts.get("Naya"), Some(&2));
        assert_eq!(counts.get("Unaligned"), Some(&1));
    }
}
