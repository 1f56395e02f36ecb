//! Session State
//!
//! The single authoritative owner of all application state: the roster, the
//! selection, the add-friend visibility flag, and the two form drafts.
//! Surfaces hold a `&Session` for rendering and mutate it only through
//! [`Session::apply`] / the named transition methods.
//!
//! # Lifecycle Rules
//!
//! - Selecting a friend forces the add-friend form closed and rebuilds the
//!   split draft from scratch (stale numeric state never crosses a selection
//!   change).
//! - Toggling the add-friend form installs a fresh draft on every flip; edits
//!   do not survive a close. The toggle does not touch the selection.
//! - A successful split clears the selection and drops the draft.

use crate::events::{ActionOutcome, UserAction};
use crate::forms::{AddFriendDraft, Payer, SplitBillDraft, DEFAULT_AVATAR_BASE};
use crate::friend::FriendId;
use crate::ids::IdGenerator;
use crate::roster::Roster;
use crate::selection::Selection;

/// Top-level application state with named transition functions
pub struct Session {
    roster: Roster,
    selection: Selection,
    show_add_friend: bool,
    add_draft: AddFriendDraft,
    split_draft: Option<SplitBillDraft>,
    avatar_base: String,
    ids: Box<dyn IdGenerator>,
}

impl Session {
    /// Create a session over a roster with the default avatar base
    pub fn new(roster: Roster, ids: Box<dyn IdGenerator>) -> Self {
        Self::with_avatar_base(roster, DEFAULT_AVATAR_BASE, ids)
    }

    /// Create a session with a configured avatar base URL
    pub fn with_avatar_base(
        roster: Roster,
        avatar_base: impl Into<String>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        let avatar_base = avatar_base.into();
        Self {
            roster,
            selection: Selection::Unselected,
            show_add_friend: false,
            add_draft: AddFriendDraft::new(avatar_base.clone()),
            split_draft: None,
            avatar_base,
            ids,
        }
    }

    // === Read-only views for rendering ===

    /// The friend roster
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether the add-friend form is open
    pub fn show_add_friend(&self) -> bool {
        self.show_add_friend
    }

    /// The add-friend draft (meaningful while the form is open)
    pub fn add_draft(&self) -> &AddFriendDraft {
        &self.add_draft
    }

    /// The split-bill draft, present exactly while a friend is selected
    pub fn split_draft(&self) -> Option<&SplitBillDraft> {
        self.split_draft.as_ref()
    }

    // === Transitions ===

    /// Apply a user action, returning whether state changed
    pub fn apply(&mut self, action: UserAction) -> ActionOutcome {
        match action {
            UserAction::ToggleAddFriend => self.toggle_add_friend(),
            UserAction::SelectFriend(id) => self.select_friend(id),
            UserAction::AddFriendNameEdited(name) => self.edit_add_friend_name(name),
            UserAction::AddFriendImageEdited(image) => self.edit_add_friend_image(image),
            UserAction::SubmitAddFriend => self.submit_add_friend(),
            UserAction::SplitBillTotalEdited(value) => self.edit_bill_total(value),
            UserAction::SplitPaidByUserEdited(value) => self.edit_paid_by_user(value),
            UserAction::SplitPayerChosen(payer) => self.choose_payer(payer),
            UserAction::SubmitSplitBill => self.submit_split_bill(),
        }
    }

    /// Open or close the add-friend form
    ///
    /// Installs a fresh draft on every flip; the selection is untouched.
    pub fn toggle_add_friend(&mut self) -> ActionOutcome {
        self.show_add_friend = !self.show_add_friend;
        self.add_draft = AddFriendDraft::new(self.avatar_base.clone());
        tracing::debug!(open = self.show_add_friend, "Toggled add-friend form");
        ActionOutcome::Applied
    }

    /// Select a friend (toggle-off on re-selection)
    ///
    /// Rejected if the id is not in the roster, keeping the invariant that a
    /// selection always references a live record. Any selection action forces
    /// the add-friend form closed and rebuilds the split draft.
    pub fn select_friend(&mut self, id: FriendId) -> ActionOutcome {
        if !self.roster.contains(&id) {
            tracing::debug!(id = %id, "Ignored selection of unknown friend");
            return ActionOutcome::Rejected;
        }

        self.selection.toggle(id);
        if self.show_add_friend {
            self.show_add_friend = false;
            self.add_draft = AddFriendDraft::new(self.avatar_base.clone());
        }

        // Fresh draft per selection; switching friends discards the old one
        self.split_draft = self
            .selection
            .selected()
            .cloned()
            .map(SplitBillDraft::new);

        tracing::debug!(selection = ?self.selection, "Selection changed");
        ActionOutcome::Applied
    }

    /// Edit the add-friend name field
    pub fn edit_add_friend_name(&mut self, name: String) -> ActionOutcome {
        if !self.show_add_friend {
            return ActionOutcome::Rejected;
        }
        self.add_draft.name = name;
        ActionOutcome::Applied
    }

    /// Edit the add-friend image field
    pub fn edit_add_friend_image(&mut self, image: String) -> ActionOutcome {
        if !self.show_add_friend {
            return ActionOutcome::Rejected;
        }
        self.add_draft.image = image;
        ActionOutcome::Applied
    }

    /// Submit the add-friend form
    ///
    /// Rejected (form stays open, roster unchanged) when a field is empty.
    /// On success the new record gets a fresh id, a zero balance, and an
    /// image annotated with that id; the draft resets and the form closes.
    pub fn submit_add_friend(&mut self) -> ActionOutcome {
        if !self.show_add_friend {
            return ActionOutcome::Rejected;
        }

        let id = self.ids.next_id();
        let Some(friend) = self.add_draft.build(id) else {
            return ActionOutcome::Rejected;
        };

        if !self.roster.add_friend(friend) {
            return ActionOutcome::Rejected;
        }
        self.add_draft = AddFriendDraft::new(self.avatar_base.clone());
        self.show_add_friend = false;
        ActionOutcome::Applied
    }

    /// Edit the bill total of the active split draft
    pub fn edit_bill_total(&mut self, value: f64) -> ActionOutcome {
        match self.split_draft.as_mut() {
            Some(draft) => {
                if draft.set_bill_total(value) {
                    ActionOutcome::Applied
                } else {
                    ActionOutcome::Rejected
                }
            }
            None => ActionOutcome::Rejected,
        }
    }

    /// Edit the user's share of the active split draft
    ///
    /// Clamp-by-rejection: a value above the bill total leaves the previous
    /// value in place.
    pub fn edit_paid_by_user(&mut self, value: f64) -> ActionOutcome {
        match self.split_draft.as_mut() {
            Some(draft) => {
                if draft.set_paid_by_user(value) {
                    ActionOutcome::Applied
                } else {
                    ActionOutcome::Rejected
                }
            }
            None => ActionOutcome::Rejected,
        }
    }

    /// Choose who is paying the bill
    pub fn choose_payer(&mut self, payer: Payer) -> ActionOutcome {
        match self.split_draft.as_mut() {
            Some(draft) => {
                draft.set_payer(payer);
                ActionOutcome::Applied
            }
            None => ActionOutcome::Rejected,
        }
    }

    /// Submit the split-bill form
    ///
    /// Rejected with no state change when no selection is active or the
    /// draft fields are zero. On success the delta lands on the selected
    /// friend's balance, the selection clears, and the draft is dropped.
    pub fn submit_split_bill(&mut self) -> ActionOutcome {
        let Some(id) = self.selection.selected().cloned() else {
            tracing::debug!("Ignored split submit with no selection");
            return ActionOutcome::Rejected;
        };
        let Some(delta) = self.split_draft.as_ref().and_then(SplitBillDraft::delta) else {
            return ActionOutcome::Rejected;
        };

        self.roster.apply_balance_delta(&id, delta);
        self.selection.clear();
        self.split_draft = None;
        ActionOutcome::Applied
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("roster", &self.roster)
            .field("selection", &self.selection)
            .field("show_add_friend", &self.show_add_friend)
            .field("add_draft", &self.add_draft)
            .field("split_draft", &self.split_draft)
            .finish_non_exhaustive()
    }
}
