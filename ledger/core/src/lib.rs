//! Ledger Core - Headless Bill-Splitting State for tally
//!
//! This crate owns all application state for tally, completely independent
//! of any UI framework. It can drive a TUI, a web UI, or run headless for
//! testing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UI Surface                    │
//! │        (tally-tui, or headless tests)         │
//! │                                               │
//! │        UserAction (up)   &Session (down)      │
//! └───────────────────┬──────────────────────────┘
//!                     │
//! ┌───────────────────┴──────────────────────────┐
//! │                  Session                      │
//! │  ┌────────┐ ┌───────────┐ ┌────────────────┐ │
//! │  │ Roster │ │ Selection │ │  Form Drafts   │ │
//! │  └────────┘ └───────────┘ └────────────────┘ │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Session`]: the single authoritative state owner; all mutation goes
//!   through its named transition functions
//! - [`UserAction`]: discrete user actions forwarded by a surface
//! - [`Roster`] / [`Friend`]: the balance ledger
//! - [`Selection`]: the two-state selection machine
//! - [`AddFriendDraft`] / [`SplitBillDraft`]: transient form state
//! - [`IdGenerator`]: the injected unique-id capability
//!
//! # No UI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any async
//! runtime. State is mutated synchronously, one user action at a time.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod events;
pub mod forms;
pub mod friend;
pub mod ids;
pub mod roster;
pub mod selection;
pub mod session;

// Re-exports for convenience
pub use config::{
    default_config_path, load_config, load_config_from_path, ConfigError, ConfigOverrides,
    TallyConfig,
};
pub use events::{ActionOutcome, UserAction};
pub use forms::{AddFriendDraft, Payer, SplitBillDraft, DEFAULT_AVATAR_BASE};
pub use friend::{Friend, FriendId};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use roster::Roster;
pub use selection::Selection;
pub use session::Session;
