/// Editable text with a cursor, shared by every input box.
///
/// The cursor is a character index, so multi-byte input (accents, emoji)
/// never splits a code point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn from_text(text: &str) -> Self {
        let mut buf = Self::default();
        buf.set(text);
        buf
    }

    /// Replace the whole content, cursor at the end
    pub fn set(&mut self, text: &str) {
        self.content = text.to_string();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor. Returns true if anything changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.content.remove(at);
        self.cursor -= 1;
        true
    }

    /// Remove the character under the cursor. Returns true if anything changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.content.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Jump to the start of the previous word
    pub fn word_left(&mut self) {
        let chars: Vec<char> = self.content.chars().collect();
        let mut pos = self.cursor;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        self.cursor = pos;
    }

    /// Jump past the end of the current word and the whitespace after it
    pub fn word_right(&mut self) {
        let chars: Vec<char> = self.content.chars().collect();
        let mut pos = self.cursor;
        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        self.cursor = pos;
    }

    /// Split the content around the cursor, for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.content.split_at(self.byte_offset(self.cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut buf = TextBuffer::default();
        for c in "hello".chars() {
            buf.insert(c);
        }
        assert_eq!(buf.as_str(), "hello");
        assert!(buf.backspace());
        assert_eq!(buf.as_str(), "hell");
        assert_eq!(buf.cursor(), 4);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut buf = TextBuffer::from_text("abc");
        buf.move_home();
        assert!(!buf.backspace());
        assert_eq!(buf.as_str(), "abc");
    }

    #[test]
    fn test_insert_mid_string() {
        let mut buf = TextBuffer::from_text("ac");
        buf.move_left();
        buf.insert('b');
        assert_eq!(buf.as_str(), "abc");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut buf = TextBuffer::from_text("café");
        assert_eq!(buf.cursor(), 4);
        buf.backspace();
        assert_eq!(buf.as_str(), "caf");
        buf.insert('é');
        buf.move_home();
        buf.delete();
        assert_eq!(buf.as_str(), "afé");
    }

    #[test]
    fn test_word_jumps() {
        let mut buf = TextBuffer::from_text("plan the week");
        buf.word_left();
        assert_eq!(buf.cursor(), 9);
        buf.word_left();
        assert_eq!(buf.cursor(), 5);
        buf.word_right();
        assert_eq!(buf.cursor(), 9);
        buf.move_end();
        buf.word_right();
        assert_eq!(buf.cursor(), 13);
    }

    #[test]
    fn test_split_at_cursor() {
        let mut buf = TextBuffer::from_text("focus");
        buf.move_left();
        buf.move_left();
        assert_eq!(buf.split_at_cursor(), ("foc", "us"));
    }
}
