use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Multi-line text being typed, with a byte-offset cursor that always sits on
/// a grapheme boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        InputBuffer::default()
    }

    /// Prefilled buffer with the cursor at the end
    pub fn from_text(text: &str) -> Self {
        let text = normalize_newlines(text);
        let cursor = text.len();
        InputBuffer { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    pub fn insert_char(&mut self, c: char) {
        if c == '\r' {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text. CRLF and lone CR become LF.
    pub fn insert_str(&mut self, s: &str) {
        let s = normalize_newlines(s);
        self.text.insert_str(self.cursor, &s);
        self.cursor += s.len();
    }

    pub fn newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    /// Delete back to the start of the previous word
    pub fn delete_word_left(&mut self) {
        let before = &self.text[..self.cursor];
        let trimmed = before.trim_end_matches([' ', '\t']);
        let start = trimmed
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + trimmed[i..].chars().next().map_or(1, char::len_utf8));
        if start == self.cursor {
            self.backspace();
            return;
        }
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    // -----------------------------------------------------------------------
    // Cursor movement
    // -----------------------------------------------------------------------

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor = line_start(&self.text, self.cursor);
    }

    pub fn move_line_end(&mut self) {
        self.cursor = line_end(&self.text, self.cursor);
    }

    /// Move to the previous line, keeping the display column where possible.
    /// Returns false on the first line.
    pub fn move_up(&mut self) -> bool {
        let start = line_start(&self.text, self.cursor);
        if start == 0 {
            return false;
        }
        let col = self.cursor_line_col().1;
        let prev_start = line_start(&self.text, start - 1);
        let prev_line = &self.text[prev_start..start - 1];
        self.cursor = prev_start + display_col_to_byte_offset(prev_line, col);
        true
    }

    /// Move to the next line, keeping the display column where possible.
    /// Returns false on the last line.
    pub fn move_down(&mut self) -> bool {
        let end = line_end(&self.text, self.cursor);
        if end >= self.text.len() {
            return false;
        }
        let col = self.cursor_line_col().1;
        let next_start = end + 1;
        let next_end = line_end(&self.text, next_start);
        let next_line = &self.text[next_start..next_end];
        self.cursor = next_start + display_col_to_byte_offset(next_line, col);
        true
    }

    // -----------------------------------------------------------------------
    // Layout queries
    // -----------------------------------------------------------------------

    /// Lines of the buffer. A trailing newline yields a final empty line.
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Cursor position as (line index, display column)
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let start = line_start(&self.text, self.cursor);
        (line, UnicodeWidthStr::width(&before[start..]))
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
    }
}

fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

fn line_start(text: &str, offset: usize) -> usize {
    text[..offset].rfind('\n').map_or(0, |i| i + 1)
}

fn line_end(text: &str, offset: usize) -> usize {
    text[offset..].find('\n').map_or(text.len(), |i| offset + i)
}

/// Byte offset of the grapheme at display column `target`, clamped to the line end.
fn display_col_to_byte_offset(line: &str, target: usize) -> usize {
    let mut col = 0;
    for (i, g) in line.grapheme_indices(true) {
        let w = UnicodeWidthStr::width(g);
        if col + w > target {
            return i;
        }
        col += w;
    }
    line.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> InputBuffer {
        let mut buf = InputBuffer::new();
        for c in s.chars() {
            buf.insert_char(c);
        }
        buf
    }

    #[test]
    fn insert_and_backspace() {
        let mut buf = typed("Run");
        assert_eq!(buf.text(), "Run");
        assert_eq!(buf.cursor(), 3);
        buf.backspace();
        assert_eq!(buf.text(), "Ru");
        buf.clear();
        assert!(buf.is_empty());
        buf.backspace();
        assert!(buf.is_empty());
    }

    #[test]
    fn backspace_removes_whole_wide_char() {
        let mut buf = typed("할 일");
        buf.backspace();
        assert_eq!(buf.text(), "할 ");
        buf.backspace();
        buf.backspace();
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn move_and_insert_in_middle() {
        let mut buf = typed("Bnch");
        buf.move_line_start();
        buf.move_right();
        buf.insert_char('e');
        assert_eq!(buf.text(), "Bench");
        buf.delete();
        assert_eq!(buf.text(), "Bech");
    }

    #[test]
    fn newline_and_cursor_position() {
        let mut buf = typed("Deadlift");
        buf.newline();
        assert_eq!(buf.cursor_line_col(), (1, 0));
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.lines(), vec!["Deadlift", ""]);
        buf.insert_str("Lunge");
        assert_eq!(buf.text(), "Deadlift\nLunge");
        assert_eq!(buf.cursor_line_col(), (1, 5));
    }

    #[test]
    fn wide_chars_count_two_columns() {
        let buf = typed("스쿼트");
        assert_eq!(buf.cursor_line_col(), (0, 6));
    }

    #[test]
    fn up_down_keep_column() {
        let mut buf = InputBuffer::from_text("abcdef\nxy\nlonger line");
        assert_eq!(buf.cursor_line_col(), (2, 11));
        assert!(buf.move_up());
        assert_eq!(buf.cursor_line_col(), (1, 2));
        assert!(buf.move_up());
        assert_eq!(buf.cursor_line_col(), (0, 2));
        assert!(!buf.move_up());
        assert!(buf.move_down());
        assert!(buf.move_down());
        assert_eq!(buf.cursor_line_col(), (2, 2));
        assert!(!buf.move_down());
    }

    #[test]
    fn paste_normalizes_newlines() {
        let mut buf = InputBuffer::new();
        buf.insert_str("a\r\nb\rc");
        assert_eq!(buf.text(), "a\nb\nc");
        assert_eq!(buf.cursor(), buf.text().len());
    }

    #[test]
    fn delete_word_left() {
        let mut buf = typed("go for a run  ");
        buf.delete_word_left();
        assert_eq!(buf.text(), "go for a ");
        buf.delete_word_left();
        assert_eq!(buf.text(), "go for ");
        let mut single = typed("word");
        single.delete_word_left();
        assert_eq!(single.text(), "");
    }

    #[test]
    fn line_start_end_on_second_line() {
        let mut buf = InputBuffer::from_text("one\ntwo");
        buf.move_line_start();
        assert_eq!(buf.cursor(), 4);
        buf.move_line_end();
        assert_eq!(buf.cursor(), 7);
    }
}
