//! Text input field
//!
//! Editing state for a single-line field plus the renderer the dialogs share.
//! The cursor counts characters, not bytes, so umlauts and `€` are safe.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// A single-line editable text value with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field prefilled with `value`, cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// Render a field as a line, highlighting the cursor cell when focused
pub fn render_input_with_cursor(prefix: &str, field: &TextField, focused: bool) -> Line<'static> {
    let mut spans = vec![];

    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    if focused {
        let before: String = field.value.chars().take(field.cursor).collect();
        let mut after = field.value.chars().skip(field.cursor);
        let cursor_char = after.next().unwrap_or(' ');
        let rest: String = after.collect();

        spans.push(Span::styled(before, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        if !rest.is_empty() {
            spans.push(Span::styled(rest, Style::default().fg(Color::White)));
        }
    } else {
        spans.push(Span::styled(
            field.value.clone(),
            Style::default().fg(Color::White),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing() {
        let mut field = TextField::new();
        for c in "Gehlt".chars() {
            field.insert(c);
        }
        field.move_left();
        field.move_left();
        field.insert('a');
        assert_eq!(field.value(), "Gehalt");
        field.move_end();
        field.backspace();
        assert_eq!(field.value(), "Gehal");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut field = TextField::with_value("Gebühr");
        assert_eq!(field.cursor(), 6);
        field.move_left();
        field.move_left();
        field.backspace();
        assert_eq!(field.value(), "Gebhr");
        field.insert('ü');
        field.move_start();
        field.delete();
        assert_eq!(field.value(), "ebühr");
    }

    #[test]
    fn test_blank() {
        assert!(TextField::with_value("   ").is_blank());
        assert!(!TextField::with_value(" x ").is_blank());
    }

    #[test]
    fn test_render_marks_cursor() {
        let field = TextField::with_value("12");
        let line = render_input_with_cursor("€ ", &field, true);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "€ 12 ");
    }
}
