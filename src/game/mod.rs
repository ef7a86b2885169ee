//! The game model and its selection state.

pub mod model;
pub mod selection;

pub use model::GameModel;
pub use selection::{Selection, SelectionError, MAX_SELECTION};
