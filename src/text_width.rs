//! Terminal display width of label text.
//!
//! Box sizing, label centring and canvas writes all measure through here,
//! so a label occupies exactly the columns its box was sized for.

use unicode_width::UnicodeWidthChar;

/// Columns a single char occupies: 0, 1 or 2.
///
/// Control characters have no defined width and count as 0.
#[inline]
pub fn char_width(ch: char) -> usize {
    if ch.is_ascii() {
        return usize::from((' '..='~').contains(&ch));
    }
    ch.width().unwrap_or(0)
}

/// Columns a string occupies when printed.
pub fn display_width(text: &str) -> usize {
    if text.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
        return text.len();
    }
    text.chars().map(char_width).sum()
}

#[cfg(test)]
#[path = "../tests/rust/test_text_width.rs"]
mod tests;
