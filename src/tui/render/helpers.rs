use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::input_buffer::InputBuffer;

/// Display width in terminal cells
pub(super) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Drop the first `cols` display columns of `s`
pub(super) fn skip_columns(s: &str, cols: usize) -> &str {
    let mut width = 0;
    for (i, c) in s.char_indices() {
        if width >= cols {
            return &s[i..];
        }
        width += c.width().unwrap_or(0);
    }
    ""
}

/// Longest prefix of `s` that fits in `max` display columns
pub(super) fn fit_width(s: &str, max: usize) -> &str {
    let mut width = 0;
    for (i, c) in s.char_indices() {
        let cw = c.width().unwrap_or(0);
        if width + cw > max {
            return &s[..i];
        }
        width += cw;
    }
    s
}

/// Greedy word wrap at spaces; words longer than `width` are hard-broken.
/// Always returns at least one line.
pub(super) fn wrap_to_width(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0;

    for word in s.split(' ') {
        let word_w = display_width(word);
        let sep = usize::from(!current.is_empty());
        if current_w + sep + word_w <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_w += sep + word_w;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        let mut rest = word;
        while display_width(rest) > width {
            let mut head = fit_width(rest, width);
            if head.is_empty() {
                // A single character wider than the whole line
                let n = rest.chars().next().map_or(rest.len(), char::len_utf8);
                head = &rest[..n];
            }
            lines.push(head.to_string());
            rest = &rest[head.len()..];
        }
        current.push_str(rest);
        current_w = display_width(rest);
    }
    lines.push(current);
    lines
}

/// Visible slice of an input buffer plus the cursor position inside it
pub(super) struct InputView {
    pub lines: Vec<String>,
    /// (column, row) relative to the top-left of the input area
    pub cursor: (u16, u16),
}

/// Scroll `buf` so the cursor stays visible in a `rows` x `width` box
pub(super) fn input_view(buf: &InputBuffer, rows: usize, width: usize) -> InputView {
    let (line, col) = buf.cursor_line_col();
    let top = line.saturating_sub(rows.saturating_sub(1));
    let h_off = col.saturating_sub(width.saturating_sub(1));
    let lines = buf
        .lines()
        .into_iter()
        .skip(top)
        .take(rows)
        .map(|l| fit_width(skip_columns(l, h_off), width).to_string())
        .collect();
    InputView {
        lines,
        cursor: ((col - h_off) as u16, (line - top) as u16),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_short_line_untouched() {
        assert_eq!(wrap_to_width("Squats", 20), vec!["Squats"]);
        assert_eq!(wrap_to_width("", 20), vec![""]);
    }

    #[test]
    fn wrap_at_spaces() {
        assert_eq!(
            wrap_to_width("bench press three sets", 11),
            vec!["bench press", "three sets"]
        );
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        assert_eq!(wrap_to_width("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_wide_chars() {
        // Each hangul syllable is two cells
        assert_eq!(wrap_to_width("스쿼트런지", 4), vec!["스쿼", "트런", "지"]);
    }

    #[test]
    fn fit_and_skip() {
        assert_eq!(fit_width("hello", 3), "hel");
        assert_eq!(fit_width("스쿼트", 3), "스");
        assert_eq!(skip_columns("hello", 2), "llo");
        assert_eq!(skip_columns("hi", 5), "");
    }

    #[test]
    fn input_view_scrolls_to_cursor() {
        let buf = InputBuffer::from_text("1\n2\n3\n4\n5\n6");
        let view = input_view(&buf, 4, 10);
        assert_eq!(view.lines, vec!["3", "4", "5", "6"]);
        assert_eq!(view.cursor, (1, 3));
    }

    #[test]
    fn input_view_scrolls_horizontally() {
        let buf = InputBuffer::from_text("abcdefghij");
        let view = input_view(&buf, 1, 5);
        assert_eq!(view.lines, vec!["ghij"]);
        assert_eq!(view.cursor, (4, 0));
    }
}
