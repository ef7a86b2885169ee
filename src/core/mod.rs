//! Core engine types: configuration and RNG.
//!
//! These are shared by every other module. Rules variants are chosen via
//! `SetConfig` rather than by changing the model.

pub mod config;
pub mod rng;

pub use config::{
    RefillPolicy, RevealPolicy, SetConfig, CLASSIC_COLORS, DEFAULT_DRAW_SIZE,
    DEFAULT_INITIAL_REVEAL, YELLOW_COLORS,
};
pub use rng::{GameRng, GameRngState};
