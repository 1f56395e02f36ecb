//! InputField Widget
//!
//! A single-line text field with a movable cursor. The field only edits its
//! local buffer; the app decides what to do with the value (and may revert
//! it when the core rejects an edit).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

/// A single-line editable text field
#[derive(Clone, Debug, Default)]
pub struct InputField {
    value: String,
    /// Cursor position in characters (not bytes)
    cursor: usize,
}

impl InputField {
    /// Create an empty field
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the contents, cursor to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Empty the field
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Handle a key event, returning whether the buffer changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                false
            }
            _ => false,
        }
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.value.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_idx = self.byte_index(self.cursor - 1);
        self.value.remove(byte_idx);
        self.cursor -= 1;
        true
    }

    /// Remove the character at the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.value.chars().count() {
            return false;
        }
        let byte_idx = self.byte_index(self.cursor);
        self.value.remove(byte_idx);
        true
    }

    /// Render into a buffer region
    ///
    /// When focused, the cursor cell is drawn reversed.
    pub fn render(&self, area: Rect, buf: &mut Buffer, style: Style, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Truncate from the left so the cursor stays visible
        let max_width = area.width.saturating_sub(1) as usize;
        let mut visible: String = self.value.clone();
        while visible.width() > max_width && !visible.is_empty() {
            visible.remove(0);
        }
        buf.set_string(area.x, area.y, &visible, style);

        if focused {
            let trimmed = self.value.chars().count() - visible.chars().count();
            let cursor_col = self.cursor.saturating_sub(trimmed);
            let prefix: String = visible.chars().take(cursor_col).collect();
            let cursor_x = area.x + prefix.width() as u16;
            if cursor_x < area.x + area.width {
                let under: String = visible
                    .chars()
                    .nth(cursor_col)
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| " ".to_string());
                buf.set_string(
                    cursor_x,
                    area.y,
                    under,
                    style.add_modifier(Modifier::REVERSED),
                );
            }
        }
    }

    /// Byte offset of the nth character
    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}
