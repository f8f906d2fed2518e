//! Text input buffer
//!
//! Holds the text of the focused form field with a cursor. The cursor counts
//! characters, not bytes.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Editing state for one text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
}

impl TextInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing existing text with the cursor at the end
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    fn byte_index(&self, cursor: usize) -> usize {
        self.content
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

/// Render a field value, drawing the cursor when focused
pub fn render_input_with_cursor(
    prefix: &str,
    value: &str,
    cursor: usize,
    focused: bool,
) -> Line<'static> {
    let mut spans = vec![];

    if !prefix.is_empty() {
        spans.push(Span::styled(
            prefix.to_string(),
            Style::default().fg(Color::Cyan),
        ));
    }

    if focused {
        let split = value
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(value.len());
        let (before, after) = value.split_at(split);

        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(Color::White),
        ));

        let mut rest = after.chars();
        let cursor_char = rest.next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        let tail: String = rest.collect();
        if !tail.is_empty() {
            spans.push(Span::styled(tail, Style::default().fg(Color::White)));
        }
    } else {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::with_content("150");
        input.insert('0');
        assert_eq!(input.value(), "1500");
        input.move_start();
        input.insert('$');
        assert_eq!(input.value(), "$1500");
        input.backspace();
        assert_eq!(input.value(), "1500");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_multibyte_cursor() {
        let mut input = TextInput::with_content("Café");
        assert_eq!(input.cursor, 4);
        input.backspace();
        assert_eq!(input.value(), "Caf");
        input.move_left();
        input.delete();
        assert_eq!(input.value(), "Ca");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new();
        input.move_left();
        input.move_right();
        input.backspace();
        input.delete();
        assert_eq!(input.cursor, 0);
        assert!(input.value().is_empty());
    }

    #[test]
    fn test_render_focused_line() {
        let line = render_input_with_cursor("Income: ", "42", 1, true);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Income: 42");

        let line = render_input_with_cursor("", "42", 2, true);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "42 ");
    }
}
