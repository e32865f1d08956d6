//! # Quill Buffer
//!
//! Text storage for the editor and the line-number gutter derived from it.
//!
//! ## Key Concepts
//!
//! - `TextBuffer` owns a rope; every edit goes through `&mut self`
//! - Line counting follows the gutter's rule: line breaks plus one
//! - `gutter` turns a line count into the read-only label column

mod buffer;
pub mod gutter;
mod indent;

pub use buffer::TextBuffer;
pub use indent::Indent;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = TextBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len_lines(), 1);
    }

    #[test]
    fn test_buffer_from_string() {
        let buffer = TextBuffer::from("Hello, World!");
        assert_eq!(buffer.len_chars(), 13);
        assert_eq!(buffer.text(), "Hello, World!");
    }

    #[test]
    fn test_gutter_matches_buffer() {
        let buffer = TextBuffer::from("fn main() {\n}\n");
        let labels = gutter::line_labels(buffer.len_lines(), ".");
        assert_eq!(labels, "1.\n2.\n3.");
    }
}
