//! Set rules: validity predicate, set completion and set finding.
//!
//! Everything here is a pure function of card values. The game model
//! applies these to its table and selection.

pub mod validity;

pub use validity::{all_same_or_all_different, complete_set, count_sets, find_set, is_set, is_set_slice};
