use crate::util::unicode;

/// A single-line text input with a byte-offset cursor on a grapheme boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
    /// Whether this input holds keyboard focus
    pub focused: bool,
}

impl TextInput {
    pub fn new() -> Self {
        TextInput::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the whole value, moving the cursor to the end
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, text: &str) {
        self.value.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.value, self.cursor) {
            self.value.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.value, self.cursor) {
            self.value.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.value, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.value, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn move_word_left(&mut self) {
        self.cursor = unicode::word_boundary_left(&self.value, self.cursor);
    }

    pub fn move_word_right(&mut self) {
        self.cursor = unicode::word_boundary_right(&self.value, self.cursor);
    }

    /// Delete from the start of the previous word up to the cursor
    pub fn delete_word_back(&mut self) {
        let start = unicode::word_boundary_left(&self.value, self.cursor);
        self.value.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    /// Delete everything before the cursor
    pub fn delete_to_start(&mut self) {
        self.value.replace_range(..self.cursor, "");
        self.cursor = 0;
    }

    /// Display column of the cursor, for placing the terminal caret
    pub fn cursor_col(&self) -> usize {
        unicode::byte_offset_to_display_col(&self.value, self.cursor)
    }
}
