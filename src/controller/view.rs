//! Renderer snapshot.
//!
//! A `TableView` is captured in one call after each interaction so the
//! renderer never observes a half-applied update. The piles are `im`
//! vectors, so capturing is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::NotificationState;
use crate::cards::{Card, CardId};
use crate::game::GameModel;

/// Derived state read by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    /// Face-up cards in table order.
    pub visible: Vector<Card>,
    /// Selected ids in selection order.
    pub selected: Vec<CardId>,
    /// Cards left in the draw pile.
    pub deck_count: usize,
    /// Cards in the matched pile.
    pub matched_count: usize,
    /// Feedback for the current selection.
    pub notification: NotificationState,
}

impl TableView {
    pub(crate) fn capture(model: &GameModel, notification: NotificationState) -> Self {
        Self {
            visible: model.visible_cards(),
            selected: model.selection().as_slice().to_vec(),
            deck_count: model.deck_count(),
            matched_count: model.matched_cards().len(),
            notification,
        }
    }

    /// Check whether a card is drawn as selected.
    #[must_use]
    pub fn is_selected(&self, id: CardId) -> bool {
        self.selected.contains(&id)
    }
}
