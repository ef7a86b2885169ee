//! The table: where every card of a game is at any moment.
//!
//! The 81 cards are partitioned into two piles:
//! - `unmatched`: ordered. The first `visible_count` cards lie face-up on
//!   the table, the rest form the face-down draw pile.
//! - `matched`: cards removed as part of a confirmed set.
//!
//! `unmatched.len() + matched.len()` never changes after construction and
//! `visible_count <= unmatched.len()` holds after every operation.
//!
//! Piles are `im` vectors so a renderer snapshot is an O(1) clone.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId};
use crate::core::config::RefillPolicy;
use crate::core::rng::GameRng;

/// Card locations for one game.
///
/// ## Usage
///
/// ```
/// use set_engine::cards::full_deck;
/// use set_engine::core::CLASSIC_COLORS;
/// use set_engine::zones::Table;
///
/// let mut table = Table::new(full_deck(&CLASSIC_COLORS, 0));
/// assert_eq!(table.deck_count(), 81);
///
/// table.reveal_to(12);
/// assert_eq!(table.visible_cards().len(), 12);
/// assert_eq!(table.deck_count(), 69);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    unmatched: Vector<Card>,
    matched: Vector<Card>,
    visible_count: usize,
}

impl Table {
    /// Create a table with every card face-down in the draw pile.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            unmatched: cards.into_iter().collect(),
            matched: Vector::new(),
            visible_count: 0,
        }
    }

    /// Cards not yet matched, table first then draw pile.
    #[must_use]
    pub fn unmatched(&self) -> &Vector<Card> {
        &self.unmatched
    }

    /// Cards removed as part of a set.
    #[must_use]
    pub fn matched(&self) -> &Vector<Card> {
        &self.matched
    }

    /// Number of face-up cards.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// The face-up cards, in table order.
    #[must_use]
    pub fn visible_cards(&self) -> Vector<Card> {
        self.unmatched.take(self.visible_count)
    }

    /// The face-down draw pile, next card to reveal first.
    #[must_use]
    pub fn deck_cards(&self) -> Vector<Card> {
        self.unmatched.skip(self.visible_count)
    }

    /// Number of cards in the draw pile.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.unmatched.len() - self.visible_count
    }

    /// Total cards tracked across both piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.unmatched.len() + self.matched.len()
    }

    /// Position of an unmatched card, `None` if matched or unknown.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.unmatched.iter().position(|card| card.id == id)
    }

    /// Look up an unmatched card.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.unmatched.iter().find(|card| card.id == id)
    }

    /// Check whether a card is still in play (table or draw pile).
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.position_of(id).is_some()
    }

    /// Check whether a card is face-up on the table.
    #[must_use]
    pub fn is_visible(&self, id: CardId) -> bool {
        self.position_of(id).is_some_and(|pos| pos < self.visible_count)
    }

    /// Set the number of face-up cards, clamped to the unmatched cards.
    pub fn reveal_to(&mut self, count: usize) {
        self.visible_count = count.min(self.unmatched.len());
    }

    /// Turn up to `count` more cards face-up.
    ///
    /// Returns how many were actually revealed.
    pub fn reveal_more(&mut self, count: usize) -> usize {
        let before = self.visible_count;
        self.reveal_to(before.saturating_add(count));
        self.visible_count - before
    }

    /// Shuffle the face-up cards among themselves.
    ///
    /// Only the visible prefix is permuted, so no card changes between
    /// table and draw pile. Every ordering is equally likely.
    pub fn shuffle_visible(&mut self, rng: &mut GameRng) {
        self.shuffle_range(0, self.visible_count, rng);
    }

    /// Shuffle the draw pile, leaving the table untouched.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        self.shuffle_range(self.visible_count, self.unmatched.len(), rng);
    }

    /// Shuffle every unmatched card, table and draw pile together.
    ///
    /// Only meaningful before a deal; the face-up count is unchanged but
    /// which cards are face-up is not preserved.
    pub fn shuffle_unmatched(&mut self, rng: &mut GameRng) {
        self.shuffle_range(0, self.unmatched.len(), rng);
    }

    fn shuffle_range(&mut self, start: usize, end: usize, rng: &mut GameRng) {
        if end <= start + 1 {
            return;
        }
        let mut segment: Vec<Card> =
            self.unmatched.iter().skip(start).take(end - start).copied().collect();
        rng.shuffle(&mut segment);
        for (offset, card) in segment.into_iter().enumerate() {
            self.unmatched[start + offset] = card;
        }
    }

    /// Move cards from play to the matched pile.
    ///
    /// Each face-up card removed vacates a table slot. With
    /// `RefillPolicy::Manual` the table shrinks; with `RefillPolicy::Auto`
    /// the slot takes the top card of the draw pile while one remains.
    ///
    /// All-or-nothing: if any id is not in play nothing moves and `0` is
    /// returned. Otherwise returns the number of cards moved.
    pub fn move_to_matched(&mut self, ids: &[CardId], refill: RefillPolicy) -> usize {
        let mut positions: SmallVec<[usize; 3]> = SmallVec::with_capacity(ids.len());
        for &id in ids {
            match self.position_of(id) {
                Some(pos) if !positions.contains(&pos) => positions.push(pos),
                Some(_) => {}
                None => return 0,
            }
        }
        positions.sort_unstable();

        // Descending so lower positions stay valid
        for &pos in positions.iter().rev() {
            let card = self.unmatched.remove(pos);
            self.matched.push_back(card);

            if pos < self.visible_count {
                self.visible_count -= 1;
                if refill == RefillPolicy::Auto && self.visible_count < self.unmatched.len() {
                    let replacement = self.unmatched.remove(self.visible_count);
                    self.unmatched.insert(pos, replacement);
                    self.visible_count += 1;
                }
            }
        }

        positions.len()
    }
}
