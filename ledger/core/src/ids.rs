//! Friend ID Generation
//!
//! The unique-id generator is the one external capability the core depends
//! on. It is injected into the [`Session`](crate::session::Session) rather
//! than baked in, so surfaces and tests can swap implementations.

use uuid::Uuid;

use crate::friend::FriendId;

/// A source of collision-free friend ids
///
/// Implementations must produce ids that never collide across the process
/// lifetime.
pub trait IdGenerator: Send {
    /// Produce the next unique id
    fn next_id(&mut self) -> FriendId;
}

/// UUID v4 id generator (default for interactive use)
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> FriendId {
        FriendId(Uuid::new_v4().to_string())
    }
}

/// Deterministic sequential id generator (tests, headless runs)
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: u64,
}

impl SequentialIds {
    /// Create a generator starting at zero
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> FriendId {
        let id = self.counter;
        self.counter += 1;
        FriendId(format!("friend_{id}"))
    }
}
