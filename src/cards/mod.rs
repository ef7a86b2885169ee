//! Card system: attributes, cards and deck generation.
//!
//! ## Key Types
//!
//! - `Shape`, `Color`, `Fill`, `Count`: the four 3-valued attributes
//! - `CardTraits`: one attribute combination
//! - `CardId`: per-model card identity
//! - `Card`: immutable card value
//! - `full_deck`: the 81-card Cartesian product

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{CardTraits, Color, Count, Fill, Shape};
pub use card::{Card, CardId};
pub use deck::{full_deck, DECK_SIZE, VALUES_PER_ATTRIBUTE};
