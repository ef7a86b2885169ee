//! The Set game model.
//!
//! `GameModel` owns one game: the table (face-up cards, draw pile and
//! matched pile), the pending selection and the RNG used for shuffles.
//! All mutations go through the methods below; the controller is the
//! only intended caller.
//!
//! ## Invariants
//!
//! - `unmatched + matched == 81` at all times
//! - `visible_count <= unmatched`
//! - at most three ids are selected, each naming an unmatched card
//!
//! ## Usage
//!
//! ```
//! use set_engine::core::{GameRng, SetConfig};
//! use set_engine::game::GameModel;
//!
//! let mut model = GameModel::with_rng(SetConfig::default(), GameRng::new(42));
//! assert!(model.visible_cards().is_empty());
//!
//! model.reveal_initial_cards();
//! assert_eq!(model.visible_cards().len(), 12);
//! assert_eq!(model.deck_count(), 69);
//! ```

use im::Vector;
use smallvec::SmallVec;

use super::selection::{Selection, SelectionError, MAX_SELECTION};
use crate::cards::{full_deck, Card, CardId, DECK_SIZE};
use crate::core::config::{RevealPolicy, SetConfig};
use crate::core::rng::{GameRng, GameRngState};
use crate::rules;
use crate::zones::Table;

/// State and rules of a single game of Set.
#[derive(Clone, Debug)]
pub struct GameModel {
    config: SetConfig,
    table: Table,
    selection: Selection,
    rng: GameRng,
    next_card_id: u32,
}

impl GameModel {
    /// Create a model seeded from entropy.
    #[must_use]
    pub fn new(config: SetConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create a model with a deterministic seed.
    #[must_use]
    pub fn with_seed(config: SetConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create a model with an injected RNG.
    ///
    /// Panics if `config` fails `SetConfig::validate`.
    #[must_use]
    pub fn with_rng(config: SetConfig, rng: GameRng) -> Self {
        config.validate();
        let mut model = Self {
            config,
            table: Table::default(),
            selection: Selection::new(),
            rng,
            next_card_id: 0,
        };
        model.reset();
        model
    }

    // === Lifecycle ===

    /// Start over with a fresh, unshuffled 81-card deck.
    ///
    /// Clears the matched pile and the selection. The table is left empty
    /// unless the config reveals on reset.
    pub fn reset(&mut self) {
        let first_id = self.next_card_id;
        self.next_card_id = first_id.wrapping_add(DECK_SIZE as u32);

        self.table = Table::new(full_deck(&self.config.colors, first_id));
        self.selection.clear();

        if self.config.reveal == RevealPolicy::Immediate {
            self.table.reveal_to(self.config.initial_reveal);
        }

        tracing::debug!(
            first_id,
            visible = self.table.visible_count(),
            "game model reset"
        );
    }

    /// Deal the opening cards.
    ///
    /// Sets the face-up count to the configured initial reveal; calling it
    /// again sets the same count.
    pub fn reveal_initial_cards(&mut self) {
        self.table.reveal_to(self.config.initial_reveal);
        tracing::debug!(visible = self.table.visible_count(), "initial cards revealed");
    }

    // === Views ===

    /// The rules configuration of this game.
    #[must_use]
    pub fn config(&self) -> &SetConfig {
        &self.config
    }

    /// The underlying table.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Face-up cards in table order.
    #[must_use]
    pub fn visible_cards(&self) -> Vector<Card> {
        self.table.visible_cards()
    }

    /// The face-down draw pile.
    #[must_use]
    pub fn deck_cards(&self) -> Vector<Card> {
        self.table.deck_cards()
    }

    /// Cards removed as part of a set.
    #[must_use]
    pub fn matched_cards(&self) -> &Vector<Card> {
        self.table.matched()
    }

    /// Cards not yet matched, table first.
    #[must_use]
    pub fn unmatched_cards(&self) -> &Vector<Card> {
        self.table.unmatched()
    }

    /// Number of face-up cards.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.table.visible_count()
    }

    /// Number of cards left in the draw pile.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.table.deck_count()
    }

    /// The pending selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn is_card_selected(&self, id: CardId) -> bool {
        self.selection.contains(id)
    }

    /// Capture the RNG position for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Selection ===

    /// Add a card to the selection.
    ///
    /// Selecting an already-selected card changes nothing. A card that is
    /// not in play is reported and ignored.
    ///
    /// # Panics
    ///
    /// If three cards are already selected. Callers must evaluate and
    /// clear a full selection first; use `try_select_card` when the caller
    /// cannot guarantee this.
    pub fn select_card(&mut self, id: CardId) -> Result<(), SelectionError> {
        assert!(
            !self.selection.is_full(),
            "cannot select more than {} cards",
            MAX_SELECTION
        );
        self.insert_selection(id)
    }

    /// Add a card to the selection, refusing instead of panicking when
    /// the selection is full.
    pub fn try_select_card(&mut self, id: CardId) -> Result<(), SelectionError> {
        if self.selection.is_full() {
            tracing::warn!(card = %id, "selection is full, card not selected");
            return Err(SelectionError::SelectionFull);
        }
        self.insert_selection(id)
    }

    fn insert_selection(&mut self, id: CardId) -> Result<(), SelectionError> {
        if !self.table.contains(id) {
            tracing::warn!(card = %id, "tried to select a card that is not in play");
            return Err(SelectionError::NotInPlay(id));
        }
        self.selection.insert(id);
        Ok(())
    }

    /// Remove a card from the selection.
    ///
    /// Unselecting a card that is not selected is reported and leaves the
    /// selection as it was.
    pub fn unselect_card(&mut self, id: CardId) -> Result<(), SelectionError> {
        if !self.selection.remove(id) {
            tracing::warn!(card = %id, "tried to unselect a card that was not selected");
            return Err(SelectionError::NotSelected(id));
        }
        Ok(())
    }

    /// True when three cards are selected.
    #[must_use]
    pub fn is_selection_complete(&self) -> bool {
        self.selection.len() == MAX_SELECTION
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The selected cards still in play, in selection order.
    #[must_use]
    pub fn selected_cards(&self) -> SmallVec<[Card; MAX_SELECTION]> {
        self.selection
            .iter()
            .filter_map(|id| self.table.get(id).copied())
            .collect()
    }

    /// True when exactly three in-play cards are selected and they form
    /// a set.
    #[must_use]
    pub fn is_valid_set(&self) -> bool {
        self.is_selection_complete() && rules::is_set_slice(&self.selected_cards())
    }

    // === Table ===

    /// Turn up to `draw_size` more cards face-up.
    ///
    /// Never reveals more cards than remain.
    pub fn draw_more(&mut self) {
        let revealed = self.table.reveal_more(self.config.draw_size);
        tracing::debug!(revealed, deck = self.table.deck_count(), "drew more cards");
    }

    /// Shuffle the face-up cards among themselves.
    pub fn shuffle_visible_portion(&mut self) {
        self.table.shuffle_visible(&mut self.rng);
        tracing::debug!(visible = self.table.visible_count(), "shuffled table");
    }

    /// Shuffle the draw pile, leaving the table untouched.
    pub fn shuffle_deck(&mut self) {
        self.table.shuffle_deck(&mut self.rng);
        tracing::debug!(deck = self.table.deck_count(), "shuffled draw pile");
    }

    /// Shuffle all unmatched cards together, for a shuffled deal.
    pub fn shuffle_unmatched(&mut self) {
        self.table.shuffle_unmatched(&mut self.rng);
        tracing::debug!(cards = self.table.unmatched().len(), "shuffled unmatched cards");
    }

    /// Move a valid selected set to the matched pile.
    ///
    /// Clears the selection. Vacated table slots are refilled according
    /// to the config's refill policy. Returns `false` and changes nothing
    /// if the selection is not a valid set.
    pub fn resolve_selected_set(&mut self) -> bool {
        if !self.is_valid_set() {
            tracing::debug!(selected = self.selection.len(), "no valid set to resolve");
            return false;
        }

        let moved = self
            .table
            .move_to_matched(self.selection.as_slice(), self.config.refill);
        self.selection.clear();

        tracing::debug!(
            moved,
            matched = self.table.matched().len(),
            visible = self.table.visible_count(),
            "resolved set"
        );
        true
    }

    // === Hints ===

    /// A set among the face-up cards, if there is one.
    #[must_use]
    pub fn find_visible_set(&self) -> Option<[CardId; 3]> {
        let visible: Vec<Card> = self.table.visible_cards().iter().copied().collect();
        rules::find_set(&visible, &self.config.colors)
    }

    /// True when the draw pile is empty and no set is face-up.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.table.deck_count() == 0 && self.find_visible_set().is_none()
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new(SetConfig::default())
    }
}
