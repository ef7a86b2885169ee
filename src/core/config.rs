//! Game configuration types.
//!
//! Games configure the model at creation by providing a `SetConfig`:
//! - the colour palette (which three colours the deck uses)
//! - how many cards are revealed at the start and per draw
//! - whether the first cards are revealed on reset or on request
//! - whether vacated table slots refill automatically
//!
//! `SetConfig::default()` gives the canonical rules.

use serde::{Deserialize, Serialize};

use crate::cards::{Color, VALUES_PER_ATTRIBUTE};

/// Cards revealed when a game starts.
pub const DEFAULT_INITIAL_REVEAL: usize = 12;

/// Cards revealed by one "draw more" request.
pub const DEFAULT_DRAW_SIZE: usize = 3;

/// Canonical colour palette.
pub const CLASSIC_COLORS: [Color; VALUES_PER_ATTRIBUTE] = [Color::Red, Color::Green, Color::Purple];

/// Alternate palette with yellow in place of purple.
pub const YELLOW_COLORS: [Color; VALUES_PER_ATTRIBUTE] = [Color::Red, Color::Green, Color::Yellow];

/// When the initial cards are put on the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealPolicy {
    /// `reset` leaves the table empty; `reveal_initial_cards` deals.
    #[default]
    Deferred,
    /// `reset` deals the initial cards itself.
    Immediate,
}

/// What happens to table slots vacated by a matched set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefillPolicy {
    /// The table shrinks; the player asks for more cards.
    #[default]
    Manual,
    /// Each vacated slot takes the top card of the draw pile, in place,
    /// while the pile lasts.
    Auto,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetConfig {
    /// The three colours the deck uses.
    pub colors: [Color; VALUES_PER_ATTRIBUTE],

    /// Cards put on the table when a game starts.
    pub initial_reveal: usize,

    /// Cards added to the table per draw.
    pub draw_size: usize,

    /// When the initial cards are dealt.
    pub reveal: RevealPolicy,

    /// How vacated slots are refilled.
    pub refill: RefillPolicy,

    /// Shuffle all unmatched cards when a new game starts, before the
    /// opening cards are dealt.
    pub shuffled_deal: bool,
}

impl Default for SetConfig {
    fn default() -> Self {
        Self {
            colors: CLASSIC_COLORS,
            initial_reveal: DEFAULT_INITIAL_REVEAL,
            draw_size: DEFAULT_DRAW_SIZE,
            reveal: RevealPolicy::Deferred,
            refill: RefillPolicy::Manual,
            shuffled_deal: false,
        }
    }
}

impl SetConfig {
    /// Create the canonical configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different colour palette.
    ///
    /// Panics if the palette repeats a colour.
    #[must_use]
    pub fn with_colors(mut self, colors: [Color; VALUES_PER_ATTRIBUTE]) -> Self {
        assert_distinct_colors(&colors);
        self.colors = colors;
        self
    }

    /// Set the number of cards dealt at the start.
    #[must_use]
    pub fn with_initial_reveal(mut self, count: usize) -> Self {
        self.initial_reveal = count;
        self
    }

    /// Set the number of cards added per draw.
    ///
    /// Panics on zero.
    #[must_use]
    pub fn with_draw_size(mut self, count: usize) -> Self {
        assert_draw_size(count);
        self.draw_size = count;
        self
    }

    /// Deal the initial cards as part of `reset`.
    #[must_use]
    pub fn reveal_on_reset(mut self) -> Self {
        self.reveal = RevealPolicy::Immediate;
        self
    }

    /// Refill vacated slots from the draw pile automatically.
    #[must_use]
    pub fn auto_refill(mut self) -> Self {
        self.refill = RefillPolicy::Auto;
        self
    }

    /// Shuffle the whole deck before each new game is dealt.
    #[must_use]
    pub fn shuffled_deal(mut self) -> Self {
        self.shuffled_deal = true;
        self
    }

    /// Check a configuration that did not come through the builders,
    /// e.g. one deserialized or built field by field.
    ///
    /// Panics if the palette repeats a colour or the draw size is zero.
    pub fn validate(&self) {
        assert_distinct_colors(&self.colors);
        assert_draw_size(self.draw_size);
    }
}

fn assert_distinct_colors(colors: &[Color; VALUES_PER_ATTRIBUTE]) {
    assert!(
        colors[0] != colors[1] && colors[0] != colors[2] && colors[1] != colors[2],
        "Colour palette must have three distinct colours"
    );
}

fn assert_draw_size(count: usize) {
    assert!(count > 0, "Draw size must be at least 1");
}
