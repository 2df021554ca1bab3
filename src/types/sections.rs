//! Document-level sections outside the card file.

use serde::Serialize;

/// Region of the design document the scanner is currently in.
///
/// Ordered: the scanner only ever moves forward through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Default,
    Flavor,
    Mechanics,
    Cards,
}

impl Section {
    pub const fn name(self) -> &'static str {
        match self {
            Section::Default => "default",
            Section::Flavor => "flavor",
            Section::Mechanics => "mechanics",
            Section::Cards => "cards",
        }
    }
}

/// Free-text lines bucketed by section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentSections {
    /// Lines before any recognized header.
    pub preamble: Vec<String>,
    /// World and flavor prose.
    pub flavor: Vec<String>,
    /// Mechanic glossary lines.
    pub mechanics: Vec<String>,
}

impl DocumentSections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the bucket for `section`. Card-section lines are ignored.
    pub fn push(&mut self, section: Section, line: impl Into<String>) {
        match section {
            Section::Default => self.preamble.push(line.into()),
            Section::Flavor => self.flavor.push(line.into()),
            Section::Mechanics => self.mechanics.push(line.into()),
            Section::Cards => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.preamble.is_empty() && self.flavor.is_empty() && self.mechanics.is_empty()
    }
}
