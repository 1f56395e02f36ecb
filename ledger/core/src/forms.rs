//! Form Drafts
//!
//! Transient, unsaved state for the two workflows: adding a friend and
//! splitting a bill. Drafts never outlive the workflow instance they belong
//! to; the [`Session`](crate::session::Session) discards and rebuilds them
//! on the lifecycle boundaries (form close, selection change).
//!
//! All validation failures are silent rejections, never errors.

use serde::{Deserialize, Serialize};

use crate::friend::{Friend, FriendId};

/// Default avatar base URL for new friends
pub const DEFAULT_AVATAR_BASE: &str = "https://i.pravatar.cc/48";

/// Transient state of the add-friend form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddFriendDraft {
    /// Friend name, empty by default
    pub name: String,
    /// Avatar base URL, defaults to [`DEFAULT_AVATAR_BASE`]
    pub image: String,
}

impl AddFriendDraft {
    /// Create a draft with the given avatar base
    pub fn new(avatar_base: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            image: avatar_base.into(),
        }
    }

    /// Whether the draft would be accepted on submit
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.image.is_empty()
    }

    /// Build a friend record from this draft
    ///
    /// Returns `None` (submission rejected) when the name or image is empty.
    /// The stored image is the draft's base annotated with the new id, so
    /// every friend gets a distinct avatar.
    pub fn build(&self, id: FriendId) -> Option<Friend> {
        if !self.is_valid() {
            tracing::debug!("Rejected add-friend submit with empty field");
            return None;
        }
        let image = format!("{}?u={}", self.image, id);
        Some(Friend::new(id, self.name.clone(), image))
    }
}

impl Default for AddFriendDraft {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_BASE)
    }
}

/// Who covered the bill at the table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payer {
    /// The user paid the whole bill
    #[default]
    User,
    /// The selected friend paid the whole bill
    Friend,
}

impl Payer {
    /// Flip between the two payers
    pub fn other(self) -> Self {
        match self {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        }
    }
}

/// Transient state of the split-bill form
///
/// Scoped to exactly one friend for its entire lifetime. Switching the
/// selection must create a fresh draft, never reuse this one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitBillDraft {
    friend: FriendId,
    bill_total: f64,
    paid_by_user: f64,
    payer: Payer,
}

impl SplitBillDraft {
    /// Create an empty draft scoped to one friend
    pub fn new(friend: FriendId) -> Self {
        Self {
            friend,
            bill_total: 0.0,
            paid_by_user: 0.0,
            payer: Payer::default(),
        }
    }

    /// The friend this draft is scoped to
    pub fn friend(&self) -> &FriendId {
        &self.friend
    }

    /// Current bill total
    pub fn bill_total(&self) -> f64 {
        self.bill_total
    }

    /// Current user share
    pub fn paid_by_user(&self) -> f64 {
        self.paid_by_user
    }

    /// Current payer
    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// Derived friend share: `bill_total - paid_by_user`
    ///
    /// Recomputed on demand, never independently editable.
    pub fn paid_by_friend(&self) -> f64 {
        self.bill_total - self.paid_by_user
    }

    /// Set the bill total
    ///
    /// Returns `false` (value retained) for non-finite input.
    pub fn set_bill_total(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        self.bill_total = value;
        true
    }

    /// Set the user share
    ///
    /// Clamp-by-rejection: returns `false` and retains the previous value
    /// when the new value exceeds the current bill total (or is not finite).
    pub fn set_paid_by_user(&mut self, value: f64) -> bool {
        if !value.is_finite() || value > self.bill_total {
            tracing::debug!(
                value = value,
                bill_total = self.bill_total,
                "Rejected user share above bill total"
            );
            return false;
        }
        self.paid_by_user = value;
        true
    }

    /// Choose who is paying the bill
    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    /// The signed balance delta a submit would apply, if the draft is valid
    ///
    /// `None` (submission rejected) when the bill total or the user share is
    /// zero or not a number. Otherwise:
    /// - `Payer::User`: `+paid_by_friend` (the friend owes the user more)
    /// - `Payer::Friend`: `-paid_by_user` (the user owes the friend more)
    pub fn delta(&self) -> Option<f64> {
        if self.bill_total == 0.0 || !self.bill_total.is_finite() {
            return None;
        }
        if self.paid_by_user == 0.0 || !self.paid_by_user.is_finite() {
            return None;
        }
        Some(match self.payer {
            Payer::User => self.paid_by_friend(),
            Payer::Friend => -self.paid_by_user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_friend_rejects_empty_name() {
        let draft = AddFriendDraft::default();
        assert!(draft.build(FriendId::from("f1")).is_none());
    }

    #[test]
    fn test_add_friend_rejects_empty_image() {
        let draft = AddFriendDraft {
            name: "Mia".to_string(),
            image: String::new(),
        };
        assert!(draft.build(FriendId::from("f1")).is_none());
    }

    #[test]
    fn test_add_friend_annotates_image_with_id() {
        let mut draft = AddFriendDraft::default();
        draft.name = "Mia".to_string();

        let friend = draft.build(FriendId::from("f1")).unwrap();
        assert_eq!(friend.name, "Mia");
        assert_eq!(friend.image, "https://i.pravatar.cc/48?u=f1");
        assert_eq!(friend.balance, 0.0);
    }

    #[test]
    fn test_paid_by_friend_is_derived() {
        let mut draft = SplitBillDraft::new(FriendId::from("f1"));
        draft.set_bill_total(50.0);
        draft.set_paid_by_user(20.0);
        assert_eq!(draft.paid_by_friend(), 30.0);

        draft.set_paid_by_user(10.0);
        assert_eq!(draft.paid_by_friend(), 40.0);
    }

    #[test]
    fn test_user_share_above_total_rejected() {
        let mut draft = SplitBillDraft::new(FriendId::from("f1"));
        draft.set_bill_total(50.0);
        draft.set_paid_by_user(20.0);

        assert!(!draft.set_paid_by_user(60.0));
        assert_eq!(draft.paid_by_user(), 20.0);
    }

    #[test]
    fn test_delta_user_pays() {
        let mut draft = SplitBillDraft::new(FriendId::from("f1"));
        draft.set_bill_total(50.0);
        draft.set_paid_by_user(20.0);
        draft.set_payer(Payer::User);
        assert_eq!(draft.delta(), Some(30.0));
    }

    #[test]
    fn test_delta_friend_pays() {
        let mut draft = SplitBillDraft::new(FriendId::from("f1"));
        draft.set_bill_total(100.0);
        draft.set_paid_by_user(60.0);
        draft.set_payer(Payer::Friend);
        assert_eq!(draft.delta(), Some(-60.0));
    }

    #[test]
    fn test_delta_rejects_zero_fields() {
        let mut draft = SplitBillDraft::new(FriendId::from("f1"));
        assert_eq!(draft.delta(), None);

        draft.set_bill_total(50.0);
        assert_eq!(draft.delta(), None); // user share still zero
    }

    #[test]
    fn test_payer_other() {
        assert_eq!(Payer::User.other(), Payer::Friend);
        assert_eq!(Payer::Friend.other(), Payer::User);
    }
}
