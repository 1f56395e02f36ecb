//! Friend Records
//!
//! A friend is passive data: an identity, a display name, an avatar
//! reference, and a signed running balance against the user.
//!
//! # Sign Convention
//!
//! - `balance < 0`: the user owes this friend
//! - `balance > 0`: this friend owes the user
//! - `balance == 0`: settled

use serde::{Deserialize, Serialize};

/// Unique friend identifier
///
/// Opaque and immutable after creation. Generated by an injected
/// [`IdGenerator`](crate::ids::IdGenerator), never by the record itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FriendId(pub String);

impl FriendId {
    /// View the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FriendId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FriendId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A friend with a running balance
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Friend {
    /// Unique id, immutable after creation
    pub id: FriendId,
    /// Display name
    pub name: String,
    /// Avatar URL, informational only
    pub image: String,
    /// Signed balance (see module docs for the sign convention)
    pub balance: f64,
}

impl Friend {
    /// Create a friend with a zero balance
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance: 0.0,
        }
    }

    /// Create a friend with a starting balance (seed records)
    pub fn with_balance(
        id: FriendId,
        name: impl Into<String>,
        image: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance,
        }
    }

    /// True when this friend owes the user
    pub fn owes_user(&self) -> bool {
        self.balance > 0.0
    }

    /// True when the user owes this friend
    pub fn user_owes(&self) -> bool {
        self.balance < 0.0
    }

    /// True when neither side owes anything
    pub fn is_settled(&self) -> bool {
        self.balance == 0.0
    }
}
