//! User Actions
//!
//! Actions sent from a UI surface to the session. Surfaces are dumb
//! renderers: they report what the user did and let the session decide
//! whether state changes.

use serde::{Deserialize, Serialize};

use crate::forms::Payer;
use crate::friend::FriendId;

/// A discrete user action from a surface
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum UserAction {
    /// Open or close the add-friend form
    ToggleAddFriend,
    /// Select a friend, or deselect if already selected
    SelectFriend(FriendId),
    /// Edit the add-friend name field
    AddFriendNameEdited(String),
    /// Edit the add-friend image field
    AddFriendImageEdited(String),
    /// Submit the add-friend form
    SubmitAddFriend,
    /// Edit the bill total in the split form
    SplitBillTotalEdited(f64),
    /// Edit the user's share in the split form
    SplitPaidByUserEdited(f64),
    /// Choose who is paying the bill
    SplitPayerChosen(Payer),
    /// Submit the split-bill form
    SubmitSplitBill,
}

/// Whether an action changed state
///
/// There is no error surface: an action either applies or silently does
/// nothing. The outcome is surfaced so the UI can e.g. revert an input
/// buffer after a rejected edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// State changed
    Applied,
    /// The action did not apply; state is unchanged
    Rejected,
}

impl ActionOutcome {
    /// True when the action changed state
    pub fn is_applied(self) -> bool {
        self == ActionOutcome::Applied
    }
}
