//! # set-engine
//!
//! Rules engine for the card game Set.
//!
//! ## Design Principles
//!
//! 1. **Model owns the rules**: card generation, the table partition,
//!    selection and set validation live in `GameModel`. Nothing else
//!    mutates game state.
//!
//! 2. **Thin controller**: `GameController` maps user intents (tap a card,
//!    ask for more cards, start a new game) onto model calls and derives
//!    the notification state on every read.
//!
//! 3. **Configuration Over Convention**: the colour palette, deal sizes and
//!    refill behaviour are chosen via `SetConfig`, not hardcoded.
//!
//! ## Architecture
//!
//! - **Deterministic by injection**: every shuffle draws from a `GameRng`
//!   that tests seed explicitly.
//!
//! - **Persistent Data Structures**: piles are `im` vectors so renderer
//!   snapshots are O(1) clones.
//!
//! - **Contract vs misuse**: a fourth selection panics; unselecting a card
//!   that is not selected is logged and returned as a `SelectionError`.
//!
//! ## Modules
//!
//! - `core`: configuration and RNG
//! - `cards`: attributes, cards, deck generation
//! - `zones`: the table (face-up cards, draw pile, matched pile)
//! - `rules`: set validity and set finding
//! - `game`: the game model and selection
//! - `controller`: the event API for renderers

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod game;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, RefillPolicy, RevealPolicy, SetConfig};

pub use crate::cards::{Card, CardId, CardTraits, Color, Count, Fill, Shape, DECK_SIZE};

pub use crate::zones::Table;

pub use crate::rules::{find_set, is_set};

pub use crate::game::{GameModel, Selection, SelectionError};

pub use crate::controller::{GameController, NotificationState, TableView};
