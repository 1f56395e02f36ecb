//! Selection Controller
//!
//! Tracks the single friend currently targeted for a bill split, or none.
//! A tagged variant rather than a nullable id, so "no selection" is a state
//! the type system knows about.
//!
//! The machine has two states and runs for the process lifetime:
//!
//! ```text
//!            toggle(x)                toggle(x) / clear()
//! Unselected ─────────► Selected(x) ──────────────────► Unselected
//!                            │
//!                            │ toggle(y), y != x
//!                            ▼
//!                       Selected(y)
//! ```

use serde::{Deserialize, Serialize};

use crate::friend::FriendId;

/// At most one selected friend
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// No friend selected (initial state)
    #[default]
    Unselected,
    /// Exactly this friend is selected
    Selected(FriendId),
}

impl Selection {
    /// Select a friend, or deselect if the same friend is selected again
    pub fn toggle(&mut self, id: FriendId) {
        *self = match self {
            Selection::Selected(current) if *current == id => Selection::Unselected,
            _ => Selection::Selected(id),
        };
    }

    /// Return to `Unselected` (after a successful split submission)
    pub fn clear(&mut self) {
        *self = Selection::Unselected;
    }

    /// The selected id, if any
    pub fn selected(&self) -> Option<&FriendId> {
        match self {
            Selection::Selected(id) => Some(id),
            Selection::Unselected => None,
        }
    }

    /// Whether this specific friend is the selected one
    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selected() == Some(id)
    }
}
