//! The read-only line-number column shown beside the editor.
//!
//! One label per line, `1.` through `n.`, joined by `\n` with no trailing
//! newline so the gutter has exactly as many lines as the content.

use std::fmt::Write;

/// Default text placed after each line number.
pub const DEFAULT_SUFFIX: &str = ".";

/// Builds the gutter text for `count` lines.
///
/// A count of zero is treated as one: an empty document still shows `1.`.
///
/// ```
/// use quill_buffer::gutter::line_labels;
///
/// assert_eq!(line_labels(3, "."), "1.\n2.\n3.");
/// ```
pub fn line_labels(count: usize, suffix: &str) -> String {
    let count = count.max(1);
    let mut out = String::with_capacity(count * (digits(count) + suffix.len() + 1));

    for n in 1..=count {
        if n > 1 {
            out.push('\n');
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{n}{suffix}");
    }
    out
}

/// Width in characters of the widest label for `count` lines.
pub fn gutter_width(count: usize, suffix: &str) -> usize {
    digits(count.max(1)) + suffix.chars().count()
}

fn digits(mut n: usize) -> usize {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
