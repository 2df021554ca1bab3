//! Card records recovered from a design document.

use serde::Serialize;

/// How a card-start line was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderKind {
    /// `[ID] Name {cost}` matched in full.
    Structured,
    /// Line only began with a bracket tag; id is empty and name is the raw line.
    Degraded,
}

/// One card, with its body split into rules and flavor paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardRecord {
    /// Short code from the header tag, empty for degraded headers.
    pub id: String,
    pub name: String,
    /// Raw cost expression, e.g. `{2}{W}{U}`.
    pub cost: String,
    /// First non-blank body line, empty when the card has no body.
    pub type_line: String,
    pub rules_lines: Vec<String>,
    pub flavor_lines: Vec<String>,
    /// 1-based source line of the card-start line.
    pub line: usize,
    pub header: HeaderKind,
}

impl CardRecord {
    /// Create a card with no body.
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost: cost.into(),
            type_line: String::new(),
            rules_lines: Vec::new(),
            flavor_lines: Vec::new(),
            line: 0,
            header: HeaderKind::Structured,
        }
    }

    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = type_line.into();
        self
    }

    pub fn with_rules<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.rules_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_flavor<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.flavor_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the card has no type, rules, or flavor text.
    pub fn is_empty(&self) -> bool {
        self.type_line.is_empty() && self.rules_lines.is_empty() && self.flavor_lines.is_empty()
    }

    /// Rules paragraphs joined with newlines.
    pub fn rules_text(&self) -> String {
        self.rules_lines.join("\n")
    }

    /// Name lowercased with every run of non-alphanumerics collapsed to `_`.
    pub fn sanitized_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        let mut pending_sep = false;

        for c in self.name.chars().flat_map(char::to_lowercase) {
            if c.is_alphanumeric() {
                if pending_sep && !out.is_empty() {
                    out.push('_');
                }
                pending_sep = false;
                out.push(c);
            } else {
                pending_sep = true;
            }
        }

        out
    }

    /// File name of the card's image asset: `M01_test_card.png`.
    pub fn image_filename(&self) -> String {
        let name = self.sanitized_name();
        if self.id.is_empty() {
            format!("{}.png", name)
        } else {
            format!("{}_{}.png", self.id, name)
        }
    }
}
