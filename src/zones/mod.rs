//! Card locations: the face-up table, the draw pile and the matched pile.

pub mod table;

pub use table::Table;
