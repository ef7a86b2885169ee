//! The player's pending selection.
//!
//! At most `MAX_SELECTION` card ids, kept in the order they were chosen.
//! The selection itself only enforces uniqueness; the model enforces the
//! size limit and that every id is still in play.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::cards::CardId;

/// Cards evaluated together as a candidate set.
pub const MAX_SELECTION: usize = 3;

/// Recoverable selection misuse.
///
/// These never leave the model in a changed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("{0} is not selected")]
    NotSelected(CardId),

    #[error("{0} is not in play")]
    NotInPlay(CardId),

    #[error("selection already holds 3 cards")]
    SelectionFull,
}

/// Ordered set of selected card ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: SmallVec<[CardId; MAX_SELECTION]>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True once three cards are selected.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTION
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.ids.contains(&id)
    }

    /// Add an id. Returns `false` if it was already selected.
    pub fn insert(&mut self, id: CardId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove an id. Returns `false` if it was not selected.
    pub fn remove(&mut self, id: CardId) -> bool {
        match self.ids.iter().position(|&selected| selected == id) {
            Some(idx) => {
                self.ids.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected ids in selection order.
    #[must_use]
    pub fn as_slice(&self) -> &[CardId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.ids.iter().copied()
    }
}
