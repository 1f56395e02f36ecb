//! Theme and Colors
//!
//! tally's palette - warm orange accents over the terminal default
//! background, with red/green reserved for the balance sign.

use ratatui::style::Color;

/// Accent orange (headers, selected row, buttons)
pub const ACCENT: Color = Color::Rgb(255, 169, 77);

/// Darker accent for borders
pub const ACCENT_DARK: Color = Color::Rgb(230, 119, 0);

/// "You owe them" red
pub const OWE_RED: Color = Color::Rgb(224, 49, 49);

/// "They owe you" green
pub const OWED_GREEN: Color = Color::Rgb(102, 168, 15);

/// Settled / dim text
pub const DIM_GRAY: Color = Color::Rgb(130, 130, 130);

/// Focused input field
pub const FIELD_FOCUS: Color = Color::Rgb(255, 224, 178);

/// Status bar text
pub const STATUS_TEXT: Color = Color::Rgb(160, 160, 160);
