//! Custom widgets

pub mod input;

pub use input::InputField;
