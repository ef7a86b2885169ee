//! Cards and their identities.
//!
//! A `Card` never changes after the deck is generated. Moving between the
//! table, the draw pile and the matched pile is tracked by `Table`, not
//! by the card.

use serde::{Deserialize, Serialize};

use super::attributes::{CardTraits, Color, Count, Fill, Shape};

/// Unique identifier for a card within a game model.
///
/// Ids are allocated from a counter that survives `reset`, so an id
/// handed out in one game never refers to a card of the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A Set card: identity plus four attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub shape: Shape,
    pub color: Color,
    pub fill: Fill,
    pub count: Count,
}

impl Card {
    /// Create a card from an id and its traits.
    #[must_use]
    pub const fn new(id: CardId, traits: CardTraits) -> Self {
        Self {
            id,
            shape: traits.shape,
            color: traits.color,
            fill: traits.fill,
            count: traits.count,
        }
    }

    /// The attribute combination of this card.
    #[must_use]
    pub const fn traits(&self) -> CardTraits {
        CardTraits {
            shape: self.shape,
            color: self.color,
            fill: self.fill,
            count: self.count,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.id, self.traits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_traits() -> CardTraits {
        CardTraits {
            shape: Shape::Diamond,
            color: Color::Red,
            fill: Fill::Solid,
            count: Count::Three,
        }
    }

    #[test]
    fn test_card_id() {
        let id = CardId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(CardId::from(5), id);
        assert_eq!(format!("{}", id), "Card(5)");
    }

    #[test]
    fn test_card_traits_roundtrip() {
        let card = Card::new(CardId::new(1), sample_traits());
        assert_eq!(card.traits(), sample_traits());
        assert_eq!(card.count.value(), 3);
    }

    #[test]
    fn test_card_display() {
        let card = Card::new(CardId::new(9), sample_traits());
        assert_eq!(card.to_string(), "Card(9) [3 red solid diamond]");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new(3), sample_traits());
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
