//! Text input state
//!
//! Editable single-line text with a cursor. The cursor counts characters,
//! not bytes, so amounts typed with a currency sign edit cleanly.

/// A single-line text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
    /// Shown while the input is empty and unfocused
    pub placeholder: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set(content);
        self
    }

    /// Replace the content, cursor at the end
    pub fn set(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.chars().count();
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

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text before the cursor, the character under it, and the rest
    pub fn split_at_cursor(&self) -> (&str, Option<char>, &str) {
        let at = self.byte_index(self.cursor);
        let (before, after) = self.content.split_at(at);
        let mut rest = after.chars();
        let under = rest.next();
        (before, under, rest.as_str())
    }

    fn len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, chars: usize) -> usize {
        self.content
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing() {
        let mut input = TextInput::new();
        for c in "500".chars() {
            input.insert(c);
        }
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "50");
        assert_eq!(input.cursor(), 1);

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "0");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new().content("10");
        input.move_start();
        input.insert('₹');
        assert_eq!(input.value(), "₹10");
        assert_eq!(input.cursor(), 1);

        input.move_end();
        input.backspace();
        input.move_start();
        input.move_right();
        assert_eq!(input.split_at_cursor(), ("₹", Some('1'), ""));

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "1");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().placeholder("0.00").content("Asha");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
        assert_eq!(input.placeholder, "0.00");
        assert_eq!(input.split_at_cursor(), ("", None, ""));
    }
}
