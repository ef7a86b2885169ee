//! Event API for the presentation layer.
//!
//! The renderer forwards taps and button presses to `GameController` and
//! reads derived state back after each call. The controller holds no state
//! of its own besides the model; the notification state is recomputed on
//! every read.

pub mod view;

pub use view::TableView;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::core::config::SetConfig;
use crate::game::GameModel;

/// Feedback for the current selection, used to colour selected cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationState {
    /// Fewer than three cards selected.
    None,
    /// Three cards selected and they form a set.
    Correct,
    /// Three cards selected and they do not form a set.
    Incorrect,
}

/// Translates user intents into model mutations.
///
/// ## Usage
///
/// ```
/// use set_engine::cards::CardId;
/// use set_engine::controller::{GameController, NotificationState};
/// use set_engine::game::GameModel;
/// use set_engine::core::SetConfig;
///
/// let mut controller = GameController::new(GameModel::with_seed(SetConfig::default(), 1));
/// controller.start_new_game();
///
/// // The unshuffled deal opens with ids 0, 1, 2: same card, counts 1-2-3
/// let first = controller.visible_cards()[0].id;
/// for raw in first.raw()..first.raw() + 3 {
///     controller.handle_card_tap(CardId::new(raw));
/// }
/// assert_eq!(controller.notification_state(), NotificationState::Correct);
///
/// // The next tap commits the set
/// controller.handle_card_tap(CardId::new(first.raw() + 3));
/// assert_eq!(controller.matched_cards().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct GameController {
    model: GameModel,
}

impl GameController {
    /// Wrap an existing model.
    #[must_use]
    pub fn new(model: GameModel) -> Self {
        Self { model }
    }

    /// Create a controller over a fresh, entropy-seeded model.
    #[must_use]
    pub fn with_config(config: SetConfig) -> Self {
        Self::new(GameModel::new(config))
    }

    /// The wrapped model.
    #[must_use]
    pub fn model(&self) -> &GameModel {
        &self.model
    }

    /// Evaluation of the current selection.
    #[must_use]
    pub fn notification_state(&self) -> NotificationState {
        if !self.model.is_selection_complete() {
            NotificationState::None
        } else if self.model.is_valid_set() {
            NotificationState::Correct
        } else {
            NotificationState::Incorrect
        }
    }

    /// Handle a tap on a card.
    ///
    /// A tap while three cards are selected first dismisses the evaluated
    /// trio, committing it to the matched pile if it was a set. Tapping one
    /// of the trio only dismisses it; tapping any other card also starts a
    /// new selection with that card. Otherwise the tap toggles the card.
    pub fn handle_card_tap(&mut self, id: CardId) {
        let was_selected = self.model.is_card_selected(id);

        if self.model.is_selection_complete() {
            if self.notification_state() == NotificationState::Correct {
                self.model.resolve_selected_set();
            }
            self.model.clear_selection();
            if was_selected {
                return;
            }
        }

        let toggled = if was_selected {
            self.model.unselect_card(id)
        } else {
            self.model.select_card(id)
        };
        if let Err(err) = toggled {
            tracing::debug!(%err, "tap ignored");
        }
    }

    /// Handle a "more cards" request.
    ///
    /// A pending correct set is committed instead of drawing.
    pub fn request_more_cards(&mut self) {
        if self.notification_state() == NotificationState::Correct {
            self.model.resolve_selected_set();
        } else {
            self.model.draw_more();
        }
    }

    /// Discard the current game and deal a new one.
    pub fn start_new_game(&mut self) {
        self.model.reset();
        if self.model.config().shuffled_deal {
            self.model.shuffle_unmatched();
        }
        self.model.reveal_initial_cards();
        tracing::debug!("new game started");
    }

    /// Deal the opening cards of the current game.
    pub fn reveal_initial_cards(&mut self) {
        self.model.reveal_initial_cards();
    }

    /// Rearrange the face-up cards.
    pub fn shuffle_visible_cards(&mut self) {
        self.model.shuffle_visible_portion();
    }

    #[must_use]
    pub fn is_card_selected(&self, id: CardId) -> bool {
        self.model.is_card_selected(id)
    }

    #[must_use]
    pub fn visible_cards(&self) -> Vector<Card> {
        self.model.visible_cards()
    }

    #[must_use]
    pub fn deck_cards(&self) -> Vector<Card> {
        self.model.deck_cards()
    }

    #[must_use]
    pub fn matched_cards(&self) -> &Vector<Card> {
        self.model.matched_cards()
    }

    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.model.deck_count()
    }

    /// Ids of a set currently on the table, if any.
    #[must_use]
    pub fn hint(&self) -> Option<[CardId; 3]> {
        self.model.find_visible_set()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.model.is_game_over()
    }

    /// Everything a renderer draws, captured in one call.
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView::capture(&self.model, self.notification_state())
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameModel::default())
    }
}
