//! tally TUI - Terminal interface for splitting bills
//!
//! A thin display client over `ledger-core`: key events become
//! `UserAction`s, and every frame renders from the session's read-only
//! views.
//!
//! # Architecture
//!
//! - **App**: focus model, key handling, async event loop
//! - **View**: pure render functions (sidebar, forms, status bar)
//! - **Widgets**: single-line input fields with local buffers
//! - **Theme**: color constants

pub mod app;
pub mod theme;
pub mod view;
pub mod widgets;

pub use app::App;
