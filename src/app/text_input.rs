//! Single-line text buffer with a character cursor, shared by the database ID
//! box and field drafts.

use unicode_width::UnicodeWidthChar;

use crate::action::CursorMove;

fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte_idx, _)| byte_idx)
}

fn char_count(s: &str) -> usize {
    s.chars().count()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    /// Character index, `0..=char_count`.
    cursor: usize,
}

impl EditBuffer {
    /// Cursor is placed at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = char_count(&text);
        Self { text, cursor }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Line breaks are dropped; the buffer is single-line.
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| !matches!(c, '\n' | '\r')) {
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_idx);
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= char_count(&self.text) {
            return false;
        }
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_idx);
        true
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        let len = char_count(&self.text);
        self.cursor = match movement {
            CursorMove::Left => self.cursor.saturating_sub(1),
            CursorMove::Right => (self.cursor + 1).min(len),
            CursorMove::Home => 0,
            CursorMove::End => len,
        };
    }

    /// Character offset to start drawing from so the text before the cursor,
    /// plus one cell for the cursor itself, fits in `width` columns.
    pub fn scroll_offset(&self, width: usize) -> usize {
        if width == 0 {
            return self.cursor;
        }
        let before = &self.text[..char_to_byte_index(&self.text, self.cursor)];
        let mut used = 0;
        let mut offset = self.cursor;
        for c in before.chars().rev() {
            used += c.width().unwrap_or(0);
            if used > width - 1 {
                break;
            }
            offset -= 1;
        }
        offset
    }
}
