//! Full-deck generation.
//!
//! The deck is the Cartesian product of the four attribute domains,
//! enumerated shape-major then colour, fill and count. Generation never
//! shuffles; callers shuffle explicitly.

use super::attributes::{CardTraits, Color, Count, Fill, Shape};
use super::card::{Card, CardId};

/// Number of values per attribute.
pub const VALUES_PER_ATTRIBUTE: usize = 3;

/// Number of cards in a full deck (3^4).
pub const DECK_SIZE: usize = 81;

/// Generate the full deck for a colour palette.
///
/// Ids are assigned consecutively starting at `first_id`, in generation
/// order.
///
/// ```
/// use set_engine::cards::{full_deck, Color, CardId, DECK_SIZE};
///
/// let deck = full_deck(&[Color::Red, Color::Green, Color::Purple], 100);
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[0].id, CardId::new(100));
/// ```
#[must_use]
pub fn full_deck(colors: &[Color; VALUES_PER_ATTRIBUTE], first_id: u32) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut next_id = first_id;

    for shape in Shape::ALL {
        for &color in colors {
            for fill in Fill::ALL {
                for count in Count::ALL {
                    let traits = CardTraits { shape, color, fill, count };
                    cards.push(Card::new(CardId::new(next_id), traits));
                    next_id = next_id.wrapping_add(1);
                }
            }
        }
    }

    cards
}
