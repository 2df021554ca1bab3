//! Mana colors and color sets.

use std::fmt;

/// One of the five mana colors, in WUBRG order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Single-letter symbol used inside cost braces.
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    /// Bracketed, lowercased token as it appears in normalized text: `{w}`.
    pub const fn token(self) -> &'static str {
        match self {
            Color::White => "{w}",
            Color::Blue => "{u}",
            Color::Black => "{b}",
            Color::Red => "{r}",
            Color::Green => "{g}",
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'U' => Some(Color::Blue),
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Color::White => 1 << 0,
            Color::Blue => 1 << 1,
            Color::Black => 1 << 2,
            Color::Red => 1 << 3,
            Color::Green => 1 << 4,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::White => "White",
            Color::Blue => "Blue",
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
        };
        write!(f, "{}", name)
    }
}

/// A set of colors stored as bitflags.
///
/// Iteration always yields WUBRG order regardless of insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSet(u8);

impl ColorSet {
    pub const COLORLESS: Self = Self(0);

    pub const fn new() -> Self {
        Self(0)
    }

    /// Build a set from color symbols, ignoring anything that is not `WUBRG`.
    pub fn from_symbols(symbols: &str) -> Self {
        symbols
            .chars()
            .filter_map(Color::from_symbol)
            .fold(Self::new(), Self::with)
    }

    pub const fn with(self, color: Color) -> Self {
        Self(self.0 | color.bit())
    }

    pub const fn contains(self, color: Color) -> bool {
        self.0 & color.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// Symbols in WUBRG order, e.g. `"WU"`.
    pub fn symbols(self) -> String {
        self.iter().map(Color::symbol).collect()
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "colorless")
        } else {
            write!(f, "{}", self.symbols())
        }
    }
}
