//! The four card attributes of Set.
//!
//! Each attribute has exactly three values in play. Shape, fill and count
//! have fixed domains; the colour domain is chosen by `SetConfig` so that
//! nothing outside the config assumes which three colours are used.

use serde::{Deserialize, Serialize};

/// Symbol drawn on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    Diamond,
    Squiggle,
    Oval,
}

impl Shape {
    /// All shapes, in deck generation order.
    pub const ALL: [Shape; 3] = [Shape::Diamond, Shape::Squiggle, Shape::Oval];
}

/// Ink colour of the symbols.
///
/// Four colours exist because two palettes are in circulation
/// (red/green/purple and red/green/yellow). A game only ever uses the
/// three listed in its `SetConfig`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
    Yellow,
}

/// Shading of the symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Fill {
    Empty,
    Solid,
    Striped,
}

impl Fill {
    /// All fills, in deck generation order.
    pub const ALL: [Fill; 3] = [Fill::Empty, Fill::Solid, Fill::Striped];
}

/// Number of symbols on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Count {
    One,
    Two,
    Three,
}

impl Count {
    /// All counts, in deck generation order.
    pub const ALL: [Count; 3] = [Count::One, Count::Two, Count::Three];

    /// Number of symbols as an integer (1-3).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Count::One => 1,
            Count::Two => 2,
            Count::Three => 3,
        }
    }

    /// Build from a symbol count, `None` outside 1-3.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Count::One),
            2 => Some(Count::Two),
            3 => Some(Count::Three),
            _ => None,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Shape::Diamond => "diamond",
            Shape::Squiggle => "squiggle",
            Shape::Oval => "oval",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Yellow => "yellow",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for Fill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Fill::Empty => "empty",
            Fill::Solid => "solid",
            Fill::Striped => "striped",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The full attribute combination of a card, without its identity.
///
/// Two cards of the same deck never share traits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTraits {
    pub shape: Shape,
    pub color: Color,
    pub fill: Fill,
    pub count: Count,
}

impl std::fmt::Display for CardTraits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.count, self.color, self.fill, self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_values() {
        let values: Vec<u8> = Count::ALL.iter().map(|c| c.value()).collect();
        assert_eq!(values, vec![1, 2, 3]);

        assert_eq!(Count::from_value(2), Some(Count::Two));
        assert_eq!(Count::from_value(0), None);
        assert_eq!(Count::from_value(4), None);
    }

    #[test]
    fn test_domains_are_distinct() {
        assert_ne!(Shape::ALL[0], Shape::ALL[1]);
        assert_ne!(Shape::ALL[1], Shape::ALL[2]);
        assert_ne!(Fill::ALL[0], Fill::ALL[2]);
    }

    #[test]
    fn test_traits_display() {
        let traits = CardTraits {
            shape: Shape::Squiggle,
            color: Color::Purple,
            fill: Fill::Striped,
            count: Count::Two,
        };
        assert_eq!(traits.to_string(), "2 purple striped squiggle");
    }

    #[test]
    fn test_traits_serde() {
        let traits = CardTraits {
            shape: Shape::Oval,
            color: Color::Yellow,
            fill: Fill::Empty,
            count: Count::One,
        };
        let json = serde_json::to_string(&traits).unwrap();
        let deserialized: CardTraits = serde_json::from_str(&json).unwrap();
        assert_eq!(traits, deserialized);
    }
}
