//! Select field widget
//!
//! A fixed-option chooser for the fund-request form. Options are cycled with
//! the left/right keys; an unset field shows its placeholder.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

/// A form field offering a fixed list of options
#[derive(Debug, Clone)]
pub struct SelectField {
    options: &'static [&'static str],
    selected: Option<usize>,
    placeholder: &'static str,
}

impl SelectField {
    /// Create a select field over `options`, nothing chosen yet
    pub fn new(options: &'static [&'static str], placeholder: &'static str) -> Self {
        Self {
            options,
            selected: None,
            placeholder,
        }
    }

    /// Advance to the next option, wrapping at the end
    pub fn next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
    }

    /// Step back to the previous option, wrapping at the start
    pub fn prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.options.len() - 1,
            Some(i) => i - 1,
        });
    }

    /// The chosen option, if any
    pub fn value(&self) -> Option<&'static str> {
        self.selected.map(|i| self.options[i])
    }

    /// Render the field into `area`; a focused field shows cycle arrows
    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let (text, style) = match self.value() {
            Some(value) => (value.to_string(), Style::default().fg(Color::White)),
            None => (
                self.placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        };

        let display = if focused {
            format!("◀ {} ▶", text)
        } else {
            text
        };
        let style = if focused {
            style.fg(Color::Cyan)
        } else {
            style
        };

        buf.set_stringn(area.x, area.y, display, area.width as usize, style);
    }
}
