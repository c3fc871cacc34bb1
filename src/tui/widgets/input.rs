//! Text input widget
//!
//! A single-line text field with cursor editing, used by the fund-request form.
//! The entered text is stored verbatim; fundboard never validates it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

/// A simple text input field
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position (byte offset; input is ASCII in practice)
    cursor: usize,
    /// Placeholder shown while the content is empty
    placeholder: String,
}

impl TextInput {
    /// Create an empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder text (builder style)
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(1);
            self.cursor -= prev;
            self.content.remove(self.cursor);
        }
    }

    /// Move the cursor one character left
    pub fn move_left(&mut self) {
        if let Some(c) = self.content[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    /// Move the cursor one character right
    pub fn move_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Whether any text has been entered
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Render the field into `area`, drawing the cursor when `focused`
    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let (text, style) = if self.content.is_empty() {
            (
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (self.content.as_str(), Style::default().fg(Color::White))
        };
        buf.set_stringn(area.x, area.y, text, area.width as usize, style);

        if focused {
            let cursor_x = area.x + (self.content[..self.cursor].chars().count() as u16);
            if cursor_x < area.x + area.width {
                let under = self.content[self.cursor..].chars().next().unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    under.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_value() {
        let mut input = TextInput::new();
        input.insert('a');
        input.insert('b');
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_backspace() {
        let mut input = TextInput::new();
        input.insert('a');
        input.insert('b');
        input.backspace();
        assert_eq!(input.value(), "a");

        input.backspace();
        input.backspace(); // empty: no-op
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_cursor_movement_and_mid_insert() {
        let mut input = TextInput::new();
        input.insert('a');
        input.insert('c');
        input.move_left();
        input.insert('b');
        assert_eq!(input.value(), "abc");

        input.move_right();
        input.insert('d');
        assert_eq!(input.value(), "abcd");
    }
}
