//! Core text buffer implementation using a rope.
//!
//! The crate is built with ropey's line-break recognition reduced to LF only,
//! so a line is exactly what the gutter numbers: everything between two `\n`.
//! A CRLF pair still counts once because the break is the `\n`.

use ropey::Rope;
use std::borrow::Cow;

/// A text buffer backed by a rope data structure.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    /// Creates a new empty buffer.
    ///
    /// # Example
    /// ```
    /// use quill_buffer::TextBuffer;
    ///
    /// let buffer = TextBuffer::new();
    /// assert!(buffer.is_empty());
    /// assert_eq!(buffer.len_lines(), 1);
    /// ```
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    // ==================== Text Access ====================

    /// Returns the entire text content.
    ///
    /// Borrowed when the rope is a single chunk, allocated otherwise.
    #[inline]
    pub fn text(&self) -> Cow<'_, str> {
        self.rope.slice(..).into()
    }

    /// Returns true when the buffer holds exactly `other`.
    pub fn eq_str(&self, other: &str) -> bool {
        self.rope == other
    }

    // ==================== Measurements ====================

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the number of characters in the buffer.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns the number of lines.
    ///
    /// An empty buffer has 1 line. A buffer ending with `\n` counts
    /// the empty line after it.
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    // ==================== Mutations ====================

    /// Replaces the whole content.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Strips spaces and tabs from the end of every line.
    ///
    /// Returns the number of lines that changed.
    pub fn trim_trailing_whitespace(&mut self) -> usize {
        let mut changed = 0;
        let mut out = String::with_capacity(self.rope.len_bytes());

        for line in self.rope.lines() {
            let line: Cow<'_, str> = line.into();
            let (body, ending) = match line.strip_suffix('\n') {
                Some(body) => match body.strip_suffix('\r') {
                    Some(body) => (body, "\r\n"),
                    None => (body, "\n"),
                },
                None => (line.as_ref(), ""),
            };

            let trimmed = body.trim_end_matches([' ', '\t']);
            if trimmed.len() != body.len() {
                changed += 1;
            }
            out.push_str(trimmed);
            out.push_str(ending);
        }

        if changed > 0 {
            self.rope = Rope::from_str(&out);
        }
        changed
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }
}

impl From<String> for TextBuffer {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_follows_newlines() {
        assert_eq!(TextBuffer::from("").len_lines(), 1);
        assert_eq!(TextBuffer::from("one").len_lines(), 1);
        assert_eq!(TextBuffer::from("one\ntwo").len_lines(), 2);
        assert_eq!(TextBuffer::from("one\ntwo\n").len_lines(), 3);
        assert_eq!(TextBuffer::from("\n\n\n").len_lines(), 4);
    }

    #[test]
    fn test_crlf_counts_once() {
        assert_eq!(TextBuffer::from("a\r\nb\r\n").len_lines(), 3);
    }

    #[test]
    fn test_lone_carriage_return_is_not_a_break() {
        assert_eq!(TextBuffer::from("a\rb").len_lines(), 1);
    }

    #[test]
    fn test_set_text() {
        let mut buffer = TextBuffer::from("old");
        buffer.set_text("new\ntext");
        assert_eq!(buffer.text(), "new\ntext");
        assert_eq!(buffer.len_lines(), 2);
        assert!(buffer.eq_str("new\ntext"));
    }

    #[test]
    fn test_trim_trailing_whitespace() {
        let mut buffer = TextBuffer::from("keep\nspaces   \ntabs\t\t\r\n  indent stays\n");
        let changed = buffer.trim_trailing_whitespace();
        assert_eq!(changed, 2);
        assert_eq!(buffer.text(), "keep\nspaces\ntabs\r\n  indent stays\n");
    }

    #[test]
    fn test_trim_trailing_whitespace_noop() {
        let mut buffer = TextBuffer::from("clean\ntext");
        assert_eq!(buffer.trim_trailing_whitespace(), 0);
        assert_eq!(buffer.text(), "clean\ntext");
    }
}
