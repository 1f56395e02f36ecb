//! Friend Roster
//!
//! The ordered collection of friend records. The roster owns the canonical
//! balance state: the only mutations are appending a new record and applying
//! a signed delta to exactly one record's balance. Records are never removed.

use serde::{Deserialize, Serialize};

use crate::friend::{Friend, FriendId};

/// Ordered collection of friend records, keyed by unique id
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Roster {
    friends: Vec<Friend>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the demo roster: Clark (-7), Sarah (+20), Anthony (settled)
    pub fn seeded() -> Self {
        Self {
            friends: vec![
                Friend::with_balance(
                    FriendId::from("118837"),
                    "Clark",
                    "https://i.pravatar.cc/48?u=118837",
                    -7.0,
                ),
                Friend::with_balance(
                    FriendId::from("933372"),
                    "Sarah",
                    "https://i.pravatar.cc/48?u=933372",
                    20.0,
                ),
                Friend::with_balance(
                    FriendId::from("499476"),
                    "Anthony",
                    "https://i.pravatar.cc/48?u=499476",
                    0.0,
                ),
            ],
        }
    }

    /// Append a friend record
    ///
    /// Returns `false` (no-op) if a record with the same id already exists.
    pub fn add_friend(&mut self, friend: Friend) -> bool {
        if self.contains(&friend.id) {
            tracing::debug!(id = %friend.id, "Rejected duplicate friend id");
            return false;
        }
        tracing::debug!(id = %friend.id, name = %friend.name, "Added friend");
        self.friends.push(friend);
        true
    }

    /// Add `delta` to the named friend's balance, leaving all others unchanged
    ///
    /// Returns `false` (no-op) if no record has that id.
    pub fn apply_balance_delta(&mut self, id: &FriendId, delta: f64) -> bool {
        match self.friends.iter_mut().find(|f| &f.id == id) {
            Some(friend) => {
                friend.balance += delta;
                tracing::debug!(
                    id = %id,
                    delta = delta,
                    balance = friend.balance,
                    "Applied balance delta"
                );
                true
            }
            None => {
                tracing::debug!(id = %id, "Balance delta for unknown friend ignored");
                false
            }
        }
    }

    /// Look up a friend by id
    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| &f.id == id)
    }

    /// Whether a record with this id exists
    pub fn contains(&self, id: &FriendId) -> bool {
        self.friends.iter().any(|f| &f.id == id)
    }

    /// All records in insertion order
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.friends.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}
