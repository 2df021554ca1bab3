//! Thematic groups (shards) a card can belong to.

use std::fmt;

use super::color::{Color, ColorSet};

/// One of the five three-color shards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shard {
    Bant,
    Esper,
    Grixis,
    Jund,
    Naya,
}

impl Shard {
    pub const ALL: [Shard; 5] = [
        Shard::Bant,
        Shard::Esper,
        Shard::Grixis,
        Shard::Jund,
        Shard::Naya,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Shard::Bant => "Bant",
            Shard::Esper => "Esper",
            Shard::Grixis => "Grixis",
            Shard::Jund => "Jund",
            Shard::Naya => "Naya",
        }
    }

    /// The shard's three colors.
    pub const fn colors(self) -> ColorSet {
        let (a, b, c) = match self {
            Shard::Bant => (Color::Green, Color::White, Color::Blue),
            Shard::Esper => (Color::White, Color::Blue, Color::Black),
            Shard::Grixis => (Color::Blue, Color::Black, Color::Red),
            Shard::Jund => (Color::Black, Color::Red, Color::Green),
            Shard::Naya => (Color::Red, Color::Green, Color::White),
        };
        ColorSet::new().with(a).with(b).with(c)
    }
}

impl fmt::Display for Shard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Group identity label assigned to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Committed to a single shard.
    Shard(Shard),
    /// Two-color card that could sit in either of two adjacent shards.
    Either(Shard, Shard),
    /// Explicitly spans shards (cascade and friends).
    MultiShard,
    /// Four or more colors.
    Maelstrom,
    /// Nothing matched.
    Unaligned,
}

impl Group {
    /// Human-readable label, e.g. `"Bant or Esper"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Shard(shard) => write!(f, "{}", shard),
            Group::Either(a, b) => write!(f, "{} or {}", a, b),
            Group::MultiShard => write!(f, "Multi-Shard"),
            Group::Maelstrom => write!(f, "Maelstrom"),
            Group::Unaligned => write!(f, "Unaligned"),
        }
    }
}
